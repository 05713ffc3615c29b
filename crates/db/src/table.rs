use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Slot {
    Table,
    Key,
    Value,
}
