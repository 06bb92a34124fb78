use crate::models::{Solution, SolutionDraft};
use crate::types::PublishStatus;
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{
    date_part, display_date, display_timestamp, join_list, parse_choice, require, split_list, FieldError,
};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionForm {
    pub title: String,
    pub main_txt: String,
    pub exam_date: String,
    pub solution_url_img_array: String,
    pub solution_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl ResourceForm for SolutionForm {
    type Record = Solution;

    const FIELDS: &'static [&'static str] = &[
        "title",
        "mainTxt",
        "examDate",
        "solutionUrlImgArray",
        "solutionUrlPDF",
        "url",
        "status",
        "remark",
    ];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "title" => self.title = value.to_string(),
            "mainTxt" => self.main_txt = value.to_string(),
            "examDate" => self.exam_date = value.to_string(),
            "solutionUrlImgArray" => self.solution_url_img_array = value.to_string(),
            "solutionUrlPDF" => self.solution_url_pdf = value.to_string(),
            "url" => self.url = value.to_string(),
            "status" => self.status = parse_choice("Status", value, PublishStatus::parse, "draft, published, expired")?,
            "remark" => self.remark = value.to_string(),
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &Solution) -> Self {
        Self {
            title: record.title.clone(),
            main_txt: record.main_txt.clone().unwrap_or_default(),
            exam_date: date_part(record.exam_date.as_deref()),
            solution_url_img_array: join_list(&record.solution_url_img_array),
            solution_url_pdf: record.solution_url_pdf.clone().unwrap_or_default(),
            url: record.url.clone().unwrap_or_default(),
            status: record.status,
            remark: record.remark.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<SolutionDraft, FieldError> {
        require("Title", &self.title)?;
        Ok(SolutionDraft {
            title: self.title.trim().to_string(),
            main_txt: self.main_txt.clone(),
            exam_date: self.exam_date.trim().to_string(),
            solution_url_img_array: split_list(&self.solution_url_img_array),
            solution_url_pdf: self.solution_url_pdf.trim().to_string(),
            url: self.url.trim().to_string(),
            status: self.status,
            remark: self.remark.clone(),
        })
    }
}

impl Tabular for Solution {
    const HEADERS: &'static [&'static str] = &["TITLE", "EXAM DATE", "STATUS", "CREATED AT"];

    fn cells(&self, _refs: &References) -> Vec<String> {
        let exam_date = match self.exam_date.as_deref() {
            Some(date) if !date.trim().is_empty() => display_date(Some(date)),
            _ => "N/A".to_string(),
        };
        vec![
            self.title.clone(),
            exam_date,
            self.status.to_string(),
            display_timestamp(self.created_at.as_ref()),
        ]
    }
}
