use crate::models::{ApplicationMethod, JobAd, JobAdDraft};
use crate::types::PublishStatus;
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{
    date_part, display_date, format_count, join_list, parse_choice, parse_count, require, split_list, FieldError,
};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobAdForm {
    pub org_id: String,
    pub job_ad_title: String,
    pub ad_publish_date: String,
    pub application_start_date: String,
    pub application_end_date: String,
    pub job_categories: String,
    pub total_job_position: String,
    pub application_method: ApplicationMethod,
    pub application_link: String,
    pub ad_url_img_array: String,
    pub ad_url_pdf: String,
    pub ad_info: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl ResourceForm for JobAdForm {
    type Record = JobAd;

    const FIELDS: &'static [&'static str] = &[
        "orgId",
        "jobAdTitle",
        "adPublishDate",
        "applicationStartDate",
        "applicationEndDate",
        "jobCategories",
        "totalJobPosition",
        "applicationMethod",
        "applicationLink",
        "adUrlImgArray",
        "adUrlPDF",
        "adInfo",
        "status",
        "remark",
    ];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        let text = value.to_string();
        match field {
            "orgId" => self.org_id = text,
            "jobAdTitle" => self.job_ad_title = text,
            "adPublishDate" => self.ad_publish_date = text,
            "applicationStartDate" => self.application_start_date = text,
            "applicationEndDate" => self.application_end_date = text,
            "jobCategories" => self.job_categories = text,
            "totalJobPosition" => self.total_job_position = text,
            "applicationMethod" => {
                self.application_method =
                    parse_choice("Application method", value, ApplicationMethod::parse, "online, offline, walk-in")?
            }
            "applicationLink" => self.application_link = text,
            "adUrlImgArray" => self.ad_url_img_array = text,
            "adUrlPDF" => self.ad_url_pdf = text,
            "adInfo" => self.ad_info = text,
            "status" => self.status = parse_choice("Status", value, PublishStatus::parse, "draft, published, expired")?,
            "remark" => self.remark = text,
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &JobAd) -> Self {
        Self {
            org_id: record.org_id.as_ref().map(|o| o.id().to_string()).unwrap_or_default(),
            job_ad_title: record.job_ad_title.clone(),
            ad_publish_date: date_part(record.ad_publish_date.as_deref()),
            application_start_date: date_part(record.application_start_date.as_deref()),
            application_end_date: date_part(record.application_end_date.as_deref()),
            job_categories: join_list(&record.job_categories),
            total_job_position: format_count(record.total_job_position),
            application_method: record.application_method,
            application_link: record.application_link.clone().unwrap_or_default(),
            ad_url_img_array: join_list(&record.ad_url_img_array),
            ad_url_pdf: record.ad_url_pdf.clone().unwrap_or_default(),
            ad_info: record.ad_info.clone().unwrap_or_default(),
            status: record.status,
            remark: record.remark.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<JobAdDraft, FieldError> {
        require("Ad title", &self.job_ad_title)?;
        require("Organization", &self.org_id)?;
        require("Publish date", &self.ad_publish_date)?;
        require("Application start date", &self.application_start_date)?;
        require("Application end date", &self.application_end_date)?;
        Ok(JobAdDraft {
            org_id: self.org_id.trim().to_string(),
            job_ad_title: self.job_ad_title.trim().to_string(),
            ad_publish_date: self.ad_publish_date.trim().to_string(),
            application_start_date: self.application_start_date.trim().to_string(),
            application_end_date: self.application_end_date.trim().to_string(),
            job_categories: split_list(&self.job_categories),
            total_job_position: parse_count("Total positions", &self.total_job_position)?,
            application_method: self.application_method,
            application_link: self.application_link.trim().to_string(),
            ad_url_img_array: split_list(&self.ad_url_img_array),
            ad_url_pdf: self.ad_url_pdf.trim().to_string(),
            ad_info: self.ad_info.clone(),
            status: self.status,
            remark: self.remark.clone(),
        })
    }

    fn parent(&self) -> Option<(&'static str, &str)> {
        Some(("Organization", &self.org_id))
    }
}

impl Tabular for JobAd {
    const HEADERS: &'static [&'static str] = &["AD TITLE", "ORGANIZATION", "POSITIONS", "END DATE", "STATUS"];

    /// `refs` maps company ids to names for ads whose organization came back unpopulated
    fn cells(&self, refs: &References) -> Vec<String> {
        let organization = self
            .org_id
            .as_ref()
            .and_then(|o| o.name().map(str::to_string).or_else(|| refs.get(o.id()).cloned()))
            .unwrap_or_else(|| "N/A".to_string());
        vec![
            self.job_ad_title.clone(),
            organization,
            self.total_job_position
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            display_date(self.application_end_date.as_deref()),
            self.status.to_string(),
        ]
    }
}
