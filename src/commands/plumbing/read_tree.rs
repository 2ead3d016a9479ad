use crate::areas::repository::Repository;
use crate::artifacts::checkout::Checkout;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub fn read_tree(&mut self, oid: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(oid)?;

        // materialize only; HEAD stays where it was
        Checkout::new(self, false).materialize(&oid)?;

        Ok(())
    }
}
