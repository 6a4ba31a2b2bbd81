use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ai_metric")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub request_id: Uuid,
    pub latency_ms: i64,
    pub outcome: String,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ai_job::Entity",
        from = "Column::RequestId",
        to = "super::ai_job::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AiJob,
}

impl Related<super::ai_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
