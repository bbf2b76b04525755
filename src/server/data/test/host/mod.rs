use crate::server::data::host::HostRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
