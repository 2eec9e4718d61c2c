//! Built-in checklist table
//!
//! Item order is display order.

use super::types::{
    ChecklistItem, ConstructionCost as Cost, ConstructionStatus as Status, CostRule, Dependency,
    SpecialFlag, SubItem, YesNo,
};

const EVERY_STATUS: &[Status] = &[Status::NotStarted, Status::InProgress, Status::Halted];
const ACTIVE_OR_HALTED: &[Status] = &[Status::InProgress, Status::Halted];
const IN_PROGRESS: &[Status] = &[Status::InProgress];

pub(super) fn builtin_items() -> Vec<ChecklistItem> {
    let from_20 = CostRule::Only(Cost::From20To50.and_above());
    let from_50 = CostRule::Only(Cost::From50To120.and_above());
    let safety_plan = Dependency::Requires {
        flag: SpecialFlag::SafetyPlan,
    };

    vec![
        ChecklistItem::new("시공안전계획서 수립 여부", EVERY_STATUS, CostRule::All)
            .depends_on(Dependency::SafetyPlanIs { value: YesNo::No }),
        ChecklistItem::new("공사안전보건대장 작성여부", EVERY_STATUS, from_50.clone()),
        ChecklistItem::new("안전관리계획서작성여부", EVERY_STATUS, CostRule::All)
            .depends_on(safety_plan),
        ChecklistItem::new(
            "가설구조물 구조적 안전성 검토",
            &[Status::NotStarted, Status::InProgress],
            CostRule::All,
        )
        .depends_on(safety_plan),
        ChecklistItem::new("일일안전점검여부", IN_PROGRESS, CostRule::All),
        ChecklistItem::new("위험성평가실시여부", IN_PROGRESS, CostRule::All).with_sub_items(vec![
            SubItem::new("최초 위험성평가"),
            SubItem::new("정기 위험성평가"),
            SubItem::new("수시 위험성평가"),
            SubItem::new("상시 위험성평가").with_costs(from_50.clone()),
            SubItem::new("가설구조물 설치·해체 위험성평가").depends_on(safety_plan),
        ]),
        ChecklistItem::new("작업계획서작성 여부", IN_PROGRESS, CostRule::All),
        ChecklistItem::new("위험공종 작업허가제 작성 여부", IN_PROGRESS, CostRule::All),
        ChecklistItem::new("TBM실시여부", IN_PROGRESS, CostRule::All),
        ChecklistItem::new("근로자 작업장 출입 전,후 체크", IN_PROGRESS, CostRule::All),
        ChecklistItem::new("안전보건조정자 선임 및 회의 여부", IN_PROGRESS, from_50.clone()),
        ChecklistItem::new("안전보건협의체 실시 여부", IN_PROGRESS, from_50.clone()),
        ChecklistItem::new(
            "재해예방기술지도 실시 여부",
            IN_PROGRESS,
            CostRule::only(&[Cost::From1To5, Cost::From5To20, Cost::From20To50, Cost::From50To120]),
        ),
        ChecklistItem::new("유해위험방지계획서 수립여부", EVERY_STATUS, CostRule::All).depends_on(
            Dependency::Requires {
                flag: SpecialFlag::HazardPlan,
            },
        ),
        ChecklistItem::new("산업안전보건관리비 사용내역 기록 여부", ACTIVE_OR_HALTED, CostRule::All),
        ChecklistItem::new("건진법 안전관리비 사용내역 기록 여부", ACTIVE_OR_HALTED, CostRule::All),
        ChecklistItem::new("휴게시설 구축 여부", IN_PROGRESS, from_20.clone()),
        ChecklistItem::new("안전보건총괄책임자/관리책임자 선임여부", EVERY_STATUS, from_20.clone()),
        ChecklistItem::new("안전보건교육", ACTIVE_OR_HALTED, CostRule::All).with_sub_items(vec![
            SubItem::new("정기교육"),
            SubItem::new("채용 시 교육").with_statuses(IN_PROGRESS),
            SubItem::new("작업내용 변경 시 교육").with_statuses(IN_PROGRESS),
            SubItem::new("특별교육").with_statuses(IN_PROGRESS),
            SubItem::new("관리감독자 교육").with_costs(from_20),
            SubItem::new("건설업 기초안전보건교육"),
        ]),
        ChecklistItem::new("MSDS(물질안전보건자료) 게시 및 교육 여부", ACTIVE_OR_HALTED, CostRule::All),
    ]
}
