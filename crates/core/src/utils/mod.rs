pub mod record;
pub mod vault_link;
