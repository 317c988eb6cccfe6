use crate::server::data::webhook::WebhookRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild;
