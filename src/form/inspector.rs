//! Inspector metadata
//!
//! Who inspected which site, and when. Branch choices depend on the
//! selected headquarters.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::Choice;

use super::errors::{FormError, FormResult};

/// Date format of `inspection_date` in input and payloads
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Headquarters {
    Gyeonggi,
    Chungnam,
}

impl Headquarters {
    pub fn branches(&self) -> &'static [Branch] {
        match self {
            Headquarters::Gyeonggi => &[Branch::YeojuIcheon, Branch::YangpyeongGwangjuSeoul],
            Headquarters::Chungnam => &[Branch::Cheonan, Branch::Gongju],
        }
    }
}

impl Choice for Headquarters {
    const ALL: &'static [Self] = &[Self::Gyeonggi, Self::Chungnam];

    fn slug(&self) -> &'static str {
        match self {
            Self::Gyeonggi => "gyeonggi",
            Self::Chungnam => "chungnam",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Gyeonggi => "경기본부",
            Self::Chungnam => "충남본부",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    YeojuIcheon,
    YangpyeongGwangjuSeoul,
    Cheonan,
    Gongju,
}

impl Branch {
    pub fn headquarters(&self) -> Headquarters {
        match self {
            Branch::YeojuIcheon | Branch::YangpyeongGwangjuSeoul => Headquarters::Gyeonggi,
            Branch::Cheonan | Branch::Gongju => Headquarters::Chungnam,
        }
    }
}

impl Choice for Branch {
    const ALL: &'static [Self] = &[
        Self::YeojuIcheon,
        Self::YangpyeongGwangjuSeoul,
        Self::Cheonan,
        Self::Gongju,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::YeojuIcheon => "yeoju-icheon",
            Self::YangpyeongGwangjuSeoul => "yangpyeong-gwangju-seoul",
            Self::Cheonan => "cheonan",
            Self::Gongju => "gongju",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::YeojuIcheon => "여주이천지사",
            Self::YangpyeongGwangjuSeoul => "양평광주서울지사",
            Self::Cheonan => "천안지사",
            Self::Gongju => "공주지사",
        }
    }
}

/// Organisation the inspector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affiliation {
    HeadOffice,
    RegionalHq,
    BranchOffice,
    Contractor,
    Other,
}

impl Choice for Affiliation {
    const ALL: &'static [Self] = &[
        Self::HeadOffice,
        Self::RegionalHq,
        Self::BranchOffice,
        Self::Contractor,
        Self::Other,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::HeadOffice => "head-office",
            Self::RegionalHq => "regional-hq",
            Self::BranchOffice => "branch-office",
            Self::Contractor => "contractor",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::HeadOffice => "본사",
            Self::RegionalHq => "본부",
            Self::BranchOffice => "지사",
            Self::Contractor => "시공사",
            Self::Other => "기타",
        }
    }
}

/// Names one inspector field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InspectorField {
    Headquarters,
    Branch,
    Affiliation,
    District,
    InspectionDate,
    InspectorName,
    ProjectName,
}

impl InspectorField {
    /// Field name used in snapshots and submission payloads
    pub fn field_name(&self) -> &'static str {
        match self {
            InspectorField::Headquarters => "headquarters",
            InspectorField::Branch => "branch",
            InspectorField::Affiliation => "inspectorAffiliation",
            InspectorField::District => "district",
            InspectorField::InspectionDate => "inspectionDate",
            InspectorField::InspectorName => "inspectorName",
            InspectorField::ProjectName => "projectName",
        }
    }

    /// Report label
    pub fn label(&self) -> &'static str {
        match self {
            InspectorField::Headquarters => "본부(점검대상)",
            InspectorField::Branch => "지사(점검대상)",
            InspectorField::Affiliation => "점검자 소속",
            InspectorField::District => "지구명",
            InspectorField::InspectionDate => "점검일자",
            InspectorField::InspectorName => "점검자명",
            InspectorField::ProjectName => "공사명",
        }
    }
}

impl fmt::Display for InspectorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for InspectorField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "headquarters" => Ok(InspectorField::Headquarters),
            "branch" => Ok(InspectorField::Branch),
            "affiliation" | "inspectorAffiliation" => Ok(InspectorField::Affiliation),
            "district" => Ok(InspectorField::District),
            "date" | "inspectionDate" => Ok(InspectorField::InspectionDate),
            "name" | "inspectorName" => Ok(InspectorField::InspectorName),
            "project" | "projectName" => Ok(InspectorField::ProjectName),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectorInfo {
    #[serde(default)]
    pub headquarters: Option<Headquarters>,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default, rename = "inspectorAffiliation")]
    pub affiliation: Option<Affiliation>,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub inspector_name: String,
    #[serde(default)]
    pub project_name: String,
}

impl Default for InspectorInfo {
    /// Blank metadata dated today
    fn default() -> Self {
        Self {
            headquarters: None,
            branch: None,
            affiliation: None,
            district: String::new(),
            inspection_date: Some(Local::now().date_naive()),
            inspector_name: String::new(),
            project_name: String::new(),
        }
    }
}

impl InspectorInfo {
    /// True when every required field is filled
    pub fn is_complete(&self) -> bool {
        self.headquarters.is_some()
            && self.branch.is_some()
            && self.affiliation.is_some()
            && self.inspection_date.is_some()
            && !self.inspector_name.trim().is_empty()
            && !self.project_name.trim().is_empty()
    }

    /// True when nothing but the default date has been entered
    pub fn is_blank(&self) -> bool {
        self.headquarters.is_none()
            && self.branch.is_none()
            && self.affiliation.is_none()
            && self.district.is_empty()
            && self.inspector_name.is_empty()
            && self.project_name.is_empty()
            && self.inspection_date == Some(Local::now().date_naive())
    }

    /// Sets one field from raw input; empty input clears it.
    ///
    /// Changing headquarters clears a branch that does not belong to the
    /// new headquarters.
    pub fn set(&mut self, field: InspectorField, raw: &str) -> FormResult<()> {
        let value = raw.trim();

        match field {
            InspectorField::Headquarters => {
                self.headquarters = parse_choice(field, value)?;
                if let Some(branch) = self.branch {
                    if Some(branch.headquarters()) != self.headquarters {
                        self.branch = None;
                    }
                }
            }
            InspectorField::Branch => {
                let branch: Option<Branch> = parse_choice(field, value)?;
                if let Some(branch) = branch {
                    match self.headquarters {
                        None => return Err(FormError::HeadquartersRequired),
                        Some(hq) if branch.headquarters() != hq => {
                            return Err(FormError::BranchMismatch {
                                branch: branch.label().to_string(),
                                headquarters: hq.label().to_string(),
                            })
                        }
                        Some(_) => {}
                    }
                }
                self.branch = branch;
            }
            InspectorField::Affiliation => self.affiliation = parse_choice(field, value)?,
            InspectorField::District => self.district = value.to_string(),
            InspectorField::InspectionDate => {
                self.inspection_date = if value.is_empty() {
                    None
                } else {
                    Some(NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
                        FormError::InvalidValue {
                            field: field.field_name().to_string(),
                            value: value.to_string(),
                        }
                    })?)
                };
            }
            InspectorField::InspectorName => self.inspector_name = value.to_string(),
            InspectorField::ProjectName => self.project_name = value.to_string(),
        }

        Ok(())
    }

    /// Display value of one field, empty when unset
    pub fn display(&self, field: InspectorField) -> String {
        match field {
            InspectorField::Headquarters => self.headquarters.map_or("", |v| v.label()).to_string(),
            InspectorField::Branch => self.branch.map_or("", |v| v.label()).to_string(),
            InspectorField::Affiliation => self.affiliation.map_or("", |v| v.label()).to_string(),
            InspectorField::District => self.district.clone(),
            InspectorField::InspectionDate => self
                .inspection_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            InspectorField::InspectorName => self.inspector_name.clone(),
            InspectorField::ProjectName => self.project_name.clone(),
        }
    }
}

fn parse_choice<T: Choice>(field: InspectorField, value: &str) -> FormResult<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    T::parse(value).map(Some).ok_or_else(|| FormError::InvalidValue {
        field: field.field_name().to_string(),
        value: value.to_string(),
    })
}
