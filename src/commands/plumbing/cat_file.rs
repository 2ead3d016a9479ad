use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn cat_file(&mut self, oid: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(oid)?;
        let object = self.database().load(&oid)?;

        // raw payload bytes, whatever the kind
        self.writer().write_all(&object.data)?;

        Ok(())
    }
}
