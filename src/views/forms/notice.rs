use crate::models::{Notice, NoticeDraft};
use crate::types::PublishStatus;
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{display_timestamp, join_list, parse_bool, parse_choice, require, split_list, FieldError};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeForm {
    pub title: String,
    pub main_txt: String,
    pub is_admit_card: bool,
    pub notice_url_img_array: String,
    pub notice_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl ResourceForm for NoticeForm {
    type Record = Notice;

    const FIELDS: &'static [&'static str] = &[
        "title",
        "mainTxt",
        "isAdmitCard",
        "noticeUrlImgArray",
        "noticeUrlPDF",
        "url",
        "status",
        "remark",
    ];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "title" => self.title = value.to_string(),
            "mainTxt" => self.main_txt = value.to_string(),
            "isAdmitCard" => self.is_admit_card = parse_bool("Admit card", value)?,
            "noticeUrlImgArray" => self.notice_url_img_array = value.to_string(),
            "noticeUrlPDF" => self.notice_url_pdf = value.to_string(),
            "url" => self.url = value.to_string(),
            "status" => self.status = parse_choice("Status", value, PublishStatus::parse, "draft, published, expired")?,
            "remark" => self.remark = value.to_string(),
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &Notice) -> Self {
        Self {
            title: record.title.clone(),
            main_txt: record.main_txt.clone().unwrap_or_default(),
            is_admit_card: record.is_admit_card,
            notice_url_img_array: join_list(&record.notice_url_img_array),
            notice_url_pdf: record.notice_url_pdf.clone().unwrap_or_default(),
            url: record.url.clone().unwrap_or_default(),
            status: record.status,
            remark: record.remark.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self, _mode: &EditMode) -> Result<NoticeDraft, FieldError> {
        require("Title", &self.title)?;
        Ok(NoticeDraft {
            title: self.title.trim().to_string(),
            main_txt: self.main_txt.clone(),
            is_admit_card: self.is_admit_card,
            notice_url_img_array: split_list(&self.notice_url_img_array),
            notice_url_pdf: self.notice_url_pdf.trim().to_string(),
            url: self.url.trim().to_string(),
            status: self.status,
            remark: self.remark.clone(),
        })
    }
}

impl Tabular for Notice {
    const HEADERS: &'static [&'static str] = &["TITLE", "TYPE", "STATUS", "CREATED AT"];

    fn cells(&self, _refs: &References) -> Vec<String> {
        let kind = if self.is_admit_card { "Admit Card" } else { "General" };
        vec![
            self.title.clone(),
            kind.to_string(),
            self.status.to_string(),
            display_timestamp(self.created_at.as_ref()),
        ]
    }
}
