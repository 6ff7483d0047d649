pub mod client;
pub mod commonids;
pub mod open_enum;
pub mod pager;
pub mod poller;
pub mod resourceids;

pub use crate::domain::model::{ListResponse, OperationResponse};
pub use crate::domain::ports::{Authorizer, ConfigProvider};
pub use crate::utils::error::Result;
pub use client::{Client, NoOptions, Options, Request, RequestOptions, Response};
pub use pager::Predicate;
pub use poller::{LroResponse, Poller};
pub use resourceids::ResourceId;
