use std::sync::Arc;

use super::auth::AuthContainer;
use super::container::ResourceContainer;
use super::notification::NotificationContainer;
use crate::api::{ApiClient, RestAuth, RestNotifications, RestResource};
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::models::{Company, ExamResult, JobAd, JobDetail, Notice, Solution, WeeklyNewspaper};
use crate::session::SharedSession;

pub type CompanyContainer = ResourceContainer<Company>;
pub type JobAdContainer = ResourceContainer<JobAd>;
pub type JobDetailContainer = ResourceContainer<JobDetail>;
pub type NoticeContainer = ResourceContainer<Notice>;
pub type ResultContainer = ResourceContainer<ExamResult>;
pub type SolutionContainer = ResourceContainer<Solution>;
pub type NewspaperContainer = ResourceContainer<WeeklyNewspaper>;

/// Every container the console works with, sharing one client and session
pub struct RootState {
    pub auth: AuthContainer,
    pub companies: CompanyContainer,
    pub job_ads: JobAdContainer,
    pub job_details: JobDetailContainer,
    pub notices: NoticeContainer,
    pub results: ResultContainer,
    pub solutions: SolutionContainer,
    pub newspapers: NewspaperContainer,
    pub notifications: NotificationContainer,
}

impl RootState {
    pub fn connect(client: ApiClient) -> Self {
        Self {
            auth: AuthContainer::new(Arc::new(RestAuth::new(client.clone())), client.session().clone()),
            companies: ResourceContainer::new(Arc::new(RestResource::<Company>::new(client.clone()))),
            job_ads: ResourceContainer::new(Arc::new(RestResource::<JobAd>::new(client.clone()))),
            job_details: ResourceContainer::new(Arc::new(RestResource::<JobDetail>::new(client.clone()))),
            notices: ResourceContainer::new(Arc::new(RestResource::<Notice>::new(client.clone()))),
            results: ResourceContainer::new(Arc::new(RestResource::<ExamResult>::new(client.clone()))),
            solutions: ResourceContainer::new(Arc::new(RestResource::<Solution>::new(client.clone()))),
            newspapers: ResourceContainer::new(Arc::new(RestResource::<WeeklyNewspaper>::new(client.clone()))),
            notifications: NotificationContainer::new(Arc::new(RestNotifications::new(client))),
        }
    }

    pub fn from_config(config: &AppConfig, session: SharedSession) -> Result<Self, ClientError> {
        Ok(Self::connect(ApiClient::from_config(config, session)?))
    }
}
