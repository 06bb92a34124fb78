use crate::models::{ExamResult, ExamResultDraft};
use crate::types::PublishStatus;
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{display_timestamp, join_list, parse_choice, require, split_list, FieldError};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultForm {
    pub title: String,
    pub main_txt: String,
    pub result_url_img_array: String,
    pub result_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl ResourceForm for ResultForm {
    type Record = ExamResult;

    const FIELDS: &'static [&'static str] =
        &["title", "mainTxt", "resultUrlImgArray", "resultUrlPDF", "url", "status", "remark"];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "title" => self.title = value.to_string(),
            "mainTxt" => self.main_txt = value.to_string(),
            "resultUrlImgArray" => self.result_url_img_array = value.to_string(),
            "resultUrlPDF" => self.result_url_pdf = value.to_string(),
            "url" => self.url = value.to_string(),
            "status" => self.status = parse_choice("Status", value, PublishStatus::parse, "draft, published, expired")?,
            "remark" => self.remark = value.to_string(),
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &ExamResult) -> Self {
        Self {
            title: record.title.clone(),
            main_txt: record.main_txt.clone().unwrap_or_default(),
            result_url_img_array: join_list(&record.result_url_img_array),
            result_url_pdf: record.result_url_pdf.clone().unwrap_or_default(),
            url: record.url.clone().unwrap_or_default(),
            status: record.status,
            remark: record.remark.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<ExamResultDraft, FieldError> {
        require("Title", &self.title)?;
        Ok(ExamResultDraft {
            title: self.title.trim().to_string(),
            main_txt: self.main_txt.clone(),
            result_url_img_array: split_list(&self.result_url_img_array),
            result_url_pdf: self.result_url_pdf.trim().to_string(),
            url: self.url.trim().to_string(),
            status: self.status,
            remark: self.remark.clone(),
        })
    }
}

impl Tabular for ExamResult {
    const HEADERS: &'static [&'static str] = &["TITLE", "STATUS", "CREATED AT"];

    fn cells(&self, _refs: &References) -> Vec<String> {
        vec![
            self.title.clone(),
            self.status.to_string(),
            display_timestamp(self.created_at.as_ref()),
        ]
    }
}
