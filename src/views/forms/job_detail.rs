use crate::models::{JobDetail, JobDetailDraft};
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{format_count, or_dash, parse_count, require, FieldError};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDetailForm {
    pub job_ad_id: String,
    pub job_title: String,
    pub job_position: String,
    pub edu_qu: String,
    pub others_qu: String,
    pub salary: String,
    pub age: String,
}

impl ResourceForm for JobDetailForm {
    type Record = JobDetail;

    const FIELDS: &'static [&'static str] = &["jobAdId", "jobTitle", "jobPosition", "eduQu", "othersQu", "salary", "age"];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        let slot = match field {
            "jobAdId" => &mut self.job_ad_id,
            "jobTitle" => &mut self.job_title,
            "jobPosition" => &mut self.job_position,
            "eduQu" => &mut self.edu_qu,
            "othersQu" => &mut self.others_qu,
            "salary" => &mut self.salary,
            "age" => &mut self.age,
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn populate(record: &JobDetail) -> Self {
        Self {
            job_ad_id: record.job_ad_id.clone(),
            job_title: record.job_title.clone(),
            job_position: format_count(record.job_position),
            edu_qu: record.edu_qu.clone().unwrap_or_default(),
            others_qu: record.others_qu.clone().unwrap_or_default(),
            salary: record.salary.clone().unwrap_or_default(),
            age: record.age.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<JobDetailDraft, FieldError> {
        require("Parent advertisement", &self.job_ad_id)?;
        require("Job title", &self.job_title)?;
        require("Educational qualification", &self.edu_qu)?;
        Ok(JobDetailDraft {
            job_ad_id: self.job_ad_id.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            job_position: parse_count("Number of positions", &self.job_position)?,
            edu_qu: self.edu_qu.clone(),
            others_qu: self.others_qu.clone(),
            salary: self.salary.trim().to_string(),
            age: self.age.trim().to_string(),
        })
    }

    fn parent(&self) -> Option<(&'static str, &str)> {
        Some(("Parent advertisement", &self.job_ad_id))
    }
}

impl Tabular for JobDetail {
    const HEADERS: &'static [&'static str] = &["POSITION TITLE", "PARENT AD", "# POSITIONS", "QUALIFICATION"];

    fn cells(&self, refs: &References) -> Vec<String> {
        vec![
            self.job_title.clone(),
            refs.get(&self.job_ad_id).cloned().unwrap_or_else(|| "N/A".to_string()),
            format_count(self.job_position),
            or_dash(self.edu_qu.as_deref()),
        ]
    }
}
