use crate::server::data::quota::QuotaRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_since;
