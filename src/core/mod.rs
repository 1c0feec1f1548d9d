//! Core logger types, hierarchy, and dispatch

pub mod attributes;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod layout;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod sink;
pub mod trace;

pub use attributes::{Attributes, FieldValue};
pub use config::BasicConfig;
pub use dispatch::{Dispatch, Outcome};
pub use error::{LoggerError, Result};
pub use filter::{Filter, MinLevelFilter};
pub use layout::{JsonLayout, Layout, LayoutHandle, TextLayout, TimestampFormat};
pub use level::Level;
pub use logger::Logger;
pub use metrics::DispatchMetrics;
pub use record::Record;
pub use registry::{global, ErrorCallback, Registry};
pub use sink::{Sink, SinkHandle};
pub use trace::ScopedTrace;
