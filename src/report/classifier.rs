//! Congestion tiers and their narrative content.

use crate::constants::congestion_tiers;
use serde::Serialize;

/// Crowding tier driving the report narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionTier {
    /// 55% and above
    High,
    /// 35% up to 55%
    Moderate,
    /// Below 35%
    Comfortable,
}

/// Headline figure shown in one health column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthMetric {
    pub name: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
    pub comment: &'static str,
}

/// Fixed report text for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierNarrative {
    pub headline: &'static str,
    pub mental: HealthMetric,
    pub physical: HealthMetric,
    pub prescription: &'static str,
}

const HIGH_NARRATIVE: TierNarrative = TierNarrative {
    headline: "탑승 금지",
    mental: HealthMetric {
        name: "스트레스",
        value: "심각",
        note: Some("전투 모드"),
        comment: "퍼스널 스페이스 붕괴! 예민함 폭발 직전입니다.",
    },
    physical: HealthMetric {
        name: "감염 위험",
        value: "매우 높음",
        note: Some("KF94 필수"),
        comment: "산소 부족으로 하품이 계속 나옵니다.",
    },
    prescription: "카페에서 30분 쉬었다 가세요.",
};

const MODERATE_NARRATIVE: TierNarrative = TierNarrative {
    headline: "주의 요망",
    mental: HealthMetric {
        name: "집중력",
        value: "저하",
        note: None,
        comment: "소음으로 인해 독서는 무리입니다.",
    },
    physical: HealthMetric {
        name: "피로도",
        value: "누적 중",
        note: None,
        comment: "손잡이를 잡느라 어깨가 결립니다.",
    },
    prescription: "가장 끝 칸(1-1, 10-4)을 공략하세요.",
};

const COMFORTABLE_NARRATIVE: TierNarrative = TierNarrative {
    headline: "탑승 추천",
    mental: HealthMetric {
        name: "학습 능률",
        value: "최상",
        note: None,
        comment: "움직이는 도서관입니다. 공부하세요!",
    },
    physical: HealthMetric {
        name: "착석 확률",
        value: "80% 이상",
        note: None,
        comment: "앉아서 꿀잠 가능합니다.",
    },
    prescription: "지금 당장 찍고 들어가세요!",
};

impl CongestionTier {
    pub fn narrative(&self) -> &'static TierNarrative {
        match self {
            CongestionTier::High => &HIGH_NARRATIVE,
            CongestionTier::Moderate => &MODERATE_NARRATIVE,
            CongestionTier::Comfortable => &COMFORTABLE_NARRATIVE,
        }
    }
}

/// Classify a measured congestion percentage
pub fn classify(score: f64) -> CongestionTier {
    if score >= congestion_tiers::HIGH {
        CongestionTier::High
    } else if score >= congestion_tiers::MODERATE {
        CongestionTier::Moderate
    } else {
        CongestionTier::Comfortable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(55.0), CongestionTier::High);
        assert_eq!(classify(54.9), CongestionTier::Moderate);
        assert_eq!(classify(35.0), CongestionTier::Moderate);
        assert_eq!(classify(34.9), CongestionTier::Comfortable);
        assert_eq!(classify(0.0), CongestionTier::Comfortable);
        assert_eq!(classify(148.2), CongestionTier::High);
    }

    #[test]
    fn test_narratives_are_tier_specific() {
        assert_eq!(CongestionTier::High.narrative().headline, "탑승 금지");
        assert_eq!(CongestionTier::Moderate.narrative().headline, "주의 요망");
        assert_eq!(CongestionTier::Comfortable.narrative().headline, "탑승 추천");
        assert_eq!(
            CongestionTier::High.narrative().physical.note,
            Some("KF94 필수")
        );
        assert_eq!(
            CongestionTier::Moderate.narrative().prescription,
            "가장 끝 칸(1-1, 10-4)을 공략하세요."
        );
    }
}
