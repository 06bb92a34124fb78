use crate::models::{WeeklyNewspaper, WeeklyNewspaperDraft};
use crate::types::PublishStatus;
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{date_part, display_date, join_list, parse_choice, require, split_list, FieldError};
use crate::views::list::{References, Tabular};

/// Newspapers are only ever drafts or published
fn newspaper_status(raw: &str) -> Option<PublishStatus> {
    PublishStatus::parse(raw).filter(|s| *s != PublishStatus::Expired)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewspaperForm {
    pub news_paper_name: String,
    pub publish_date: String,
    pub paper_url_img_array: String,
    pub paper_url_pdf: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl ResourceForm for NewspaperForm {
    type Record = WeeklyNewspaper;

    const FIELDS: &'static [&'static str] =
        &["newsPaperName", "publishDate", "paperUrlImgArray", "paperUrlPDF", "status", "remark"];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "newsPaperName" => self.news_paper_name = value.to_string(),
            "publishDate" => self.publish_date = value.to_string(),
            "paperUrlImgArray" => self.paper_url_img_array = value.to_string(),
            "paperUrlPDF" => self.paper_url_pdf = value.to_string(),
            "status" => self.status = parse_choice("Status", value, newspaper_status, "draft, published")?,
            "remark" => self.remark = value.to_string(),
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &WeeklyNewspaper) -> Self {
        Self {
            news_paper_name: record.news_paper_name.clone(),
            publish_date: date_part(record.publish_date.as_deref()),
            paper_url_img_array: join_list(&record.paper_url_img_array),
            paper_url_pdf: record.paper_url_pdf.clone().unwrap_or_default(),
            status: record.status,
            remark: record.remark.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<WeeklyNewspaperDraft, FieldError> {
        require("Newspaper name", &self.news_paper_name)?;
        require("Publish date", &self.publish_date)?;
        Ok(WeeklyNewspaperDraft {
            news_paper_name: self.news_paper_name.trim().to_string(),
            publish_date: self.publish_date.trim().to_string(),
            paper_url_img_array: split_list(&self.paper_url_img_array),
            paper_url_pdf: self.paper_url_pdf.trim().to_string(),
            status: self.status,
            remark: self.remark.clone(),
        })
    }
}

impl Tabular for WeeklyNewspaper {
    const HEADERS: &'static [&'static str] = &["NAME", "PUBLISH DATE", "STATUS"];

    fn cells(&self, _refs: &References) -> Vec<String> {
        vec![
            self.news_paper_name.clone(),
            display_date(self.publish_date.as_deref()),
            self.status.to_string(),
        ]
    }
}
