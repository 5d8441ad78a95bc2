pub mod config;
pub mod controller;
pub mod dropdown;
pub mod form;
pub mod hooks;
pub mod init;
pub mod notification;
pub mod transport;

pub use config::{ConfigError, ControllerConfig, HookResolution, Messages};
pub use controller::FormSubmitController;
pub use dropdown::{DropdownSync, MenuItem, SelectionState, SelectionTarget};
pub use form::{Field, Form, HookAttributes, SubmitMethod, SubmitOptions, SubmitRequest};
pub use formkit_model::Envelope;
pub use hooks::{Dispatch, FormHooks, HookError, HookRegistry, ResponseContext};
pub use init::Initializers;
pub use notification::{BusyState, NotificationKind, NotificationRequest, Presenter};
pub use transport::{Transport, TransportError, TransportInfo, TransportResponse};
