use crate::server::{bot::mock::MockDiscord, error::AppError, service::guild::GuildService};
use test_utils::{builder::TestBuilder, factory};
