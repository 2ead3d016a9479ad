use crate::areas::repository::Repository;
use crate::artifacts::checkout::Checkout;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(target)?;
        let commit = self.database().parse_commit(&oid)?;

        Checkout::new(self, true).run(&commit)?;

        writeln!(
            self.writer(),
            "HEAD is now at {} {}",
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
