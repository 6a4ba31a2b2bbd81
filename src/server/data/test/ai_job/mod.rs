use crate::{
    model::ai_job::AiJobStatus,
    server::{
        data::{ai_job::AiJobRepository, ai_metric::AiMetricRepository},
        model::ai_job::{AiOutcome, CreateAiJobParam},
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod lifecycle;
