use crate::areas::repository::Repository;
use crate::artifacts::log::History;
use crate::artifacts::objects::commit::{Commit, CommitError};
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Write;

impl Repository {
    pub fn log(&mut self, start: Option<&str>) -> anyhow::Result<()> {
        let commits = match start {
            Some(start) => History::new(self).from_commit(ObjectId::try_parse(start)?),
            None => History::new(self).from_head(),
        };

        match commits {
            Ok(commits) => {
                for commit in &commits {
                    self.show_commit(commit)?;
                }

                Ok(())
            }
            // an empty repository is not an error, it just has nothing to show
            Err(CommitError::NoHead) => {
                writeln!(self.writer(), "No commits found")?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let header = format!("commit {}", commit.oid());
        let header = if std::io::stdout().is_terminal() {
            header.yellow().to_string()
        } else {
            header
        };

        writeln!(self.writer(), "{}", header)?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
