use crate::models::{Company, CompanyDraft, CompanyStatus, OrgType};
use crate::views::edit::{EditMode, ResourceForm};
use crate::views::fields::{or_dash, parse_bool, parse_choice, require, yes_no, FieldError};
use crate::views::list::{References, Tabular};

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyForm {
    pub org_name: String,
    pub org_location: String,
    pub org_web: String,
    pub org_logo: String,
    pub org_info: String,
    pub org_type: OrgType,
    pub is_hot_job: bool,
    pub status: CompanyStatus,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self {
            org_name: String::new(),
            org_location: String::new(),
            org_web: String::new(),
            org_logo: String::new(),
            org_info: String::new(),
            org_type: OrgType::Private,
            is_hot_job: false,
            status: CompanyStatus::Pending,
        }
    }
}

impl ResourceForm for CompanyForm {
    type Record = Company;

    const FIELDS: &'static [&'static str] = &[
        "orgName",
        "orgLocation",
        "orgWeb",
        "orgLogo",
        "orgInfo",
        "orgType",
        "isHotJob",
        "status",
    ];

    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "orgName" => self.org_name = value.to_string(),
            "orgLocation" => self.org_location = value.to_string(),
            "orgWeb" => self.org_web = value.to_string(),
            "orgLogo" => self.org_logo = value.to_string(),
            "orgInfo" => self.org_info = value.to_string(),
            "orgType" => {
                self.org_type = parse_choice("Organization type", value, OrgType::parse, "Government, Private, NGO, BANK")?
            }
            "isHotJob" => self.is_hot_job = parse_bool("Hot job", value)?,
            "status" => {
                self.status = parse_choice("Status", value, CompanyStatus::parse, "approved, pending, rejected")?
            }
            other => return Err(FieldError::unknown(other, Self::FIELDS)),
        }
        Ok(())
    }

    fn populate(record: &Company) -> Self {
        Self {
            org_name: record.org_name.clone(),
            org_location: record.org_location.clone().unwrap_or_default(),
            org_web: record.org_web.clone().unwrap_or_default(),
            org_logo: record.org_logo.clone().unwrap_or_default(),
            org_info: record.org_info.clone().unwrap_or_default(),
            org_type: record.org_type,
            is_hot_job: record.is_hot_job,
            status: record.status,
        }
    }

    fn to_draft(&self, mode: &EditMode) -> Result<CompanyDraft, FieldError> {
        require("Company name", &self.org_name)?;
        // Logo is only required when creating
        if mode.is_create() {
            require("Logo URL", &self.org_logo)?;
        }
        Ok(CompanyDraft {
            org_name: self.org_name.trim().to_string(),
            org_location: self.org_location.trim().to_string(),
            org_web: self.org_web.trim().to_string(),
            org_logo: self.org_logo.trim().to_string(),
            org_info: self.org_info.clone(),
            org_type: self.org_type,
            is_hot_job: self.is_hot_job,
            status: self.status,
        })
    }
}

impl Tabular for Company {
    const HEADERS: &'static [&'static str] = &["NAME", "LOCATION", "TYPE", "HOT", "STATUS", "WEBSITE"];

    fn cells(&self, _refs: &References) -> Vec<String> {
        vec![
            self.org_name.clone(),
            or_dash(self.org_location.as_deref()),
            self.org_type.to_string(),
            yes_no(self.is_hot_job).to_string(),
            self.status.to_string(),
            or_dash(self.org_web.as_deref()),
        ]
    }
}
