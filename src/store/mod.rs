//! Client-side state: one container per resource plus the auth and
//! notification flows. Containers own their cached data and expose an
//! explicit [`CommandState`] per operation for views to observe.

mod auth;
mod command;
mod container;
mod notification;
mod root;

pub use auth::{AuthContainer, AuthOperation};
pub use command::{CommandFailure, CommandState, Outcome};
pub use container::ResourceContainer;
pub use notification::{NotificationContainer, NotificationOperation};
pub use root::{
    CompanyContainer, JobAdContainer, JobDetailContainer, NewspaperContainer, NoticeContainer, ResultContainer,
    RootState, SolutionContainer,
};
