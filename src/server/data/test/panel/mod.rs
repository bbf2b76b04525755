use crate::server::{data::panel::PanelRepository, model::panel::InsertPanelParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
