//! One form per resource, plus how each resource renders as a table row

mod company;
mod job_ad;
mod job_detail;
mod newspaper;
mod notice;
mod result;
mod solution;

pub use company::CompanyForm;
pub use job_ad::JobAdForm;
pub use job_detail::JobDetailForm;
pub use newspaper::NewspaperForm;
pub use notice::NoticeForm;
pub use result::ResultForm;
pub use solution::SolutionForm;
