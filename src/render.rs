//! Report rendering for the terminal (human) and for scripting (JSON).

use crate::constants::{GOLDEN_WINDOW_CEILING, NO_RECOMMENDATION_LABEL};
use crate::models::{CongestionReading, DailySeries};
use crate::report::{CongestionTier, DailyBriefing, HealthReport, TierNarrative};
use colored::*;

/// Characters per 5% in the hourly bar chart
const BAR_UNIT: f64 = 5.0;
const BAR_MAX_WIDTH: usize = 40;

pub fn render_json(report: &HealthReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_human(report: &HealthReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        format!("{}역 도착 정보", report.station).bright_green().bold()
    ));
    if report.arrivals.is_empty() {
        output.push_str(&format!("  {}\n", "도착 정보 없음".bright_black()));
    }
    for arrival in &report.arrivals {
        output.push_str(&format!(
            "  {} {} {}\n",
            arrival.line_name.bright_cyan(),
            arrival.message.bright_white(),
            format!("({})", arrival.received_at).bright_black()
        ));
    }

    output.push_str(&format!(
        "\n{}\n",
        format!("주변 대기 정보 ({})", report.district).bright_green().bold()
    ));
    match &report.air_quality {
        Some(record) => output.push_str(&format!(
            "  {} {}  {} {}  {} {}  {} {}\n",
            "지역".bright_cyan(),
            record.district,
            "미세먼지".bright_cyan(),
            optional_number(record.pm10),
            "초미세먼지".bright_cyan(),
            optional_number(record.pm25),
            "상태".bright_cyan(),
            record.status
        )),
        None => output.push_str(&format!("  {}\n", "미세먼지 정보 없음".bright_black())),
    }

    output.push('\n');
    output.push_str(&render_diagnosis(report));

    if let Some(briefing) = &report.briefing {
        output.push('\n');
        output.push_str(&render_briefing(briefing));
    }

    output
}

fn render_diagnosis(report: &HealthReport) -> String {
    let mut output = format!("{}\n", "Dr. 설의 정밀 건강 진단서".bright_green().bold());

    output.push_str(&format!(
        "  {} {}\n",
        "진단 근거:".bright_cyan(),
        report.congestion.reference
    ));
    output.push_str(&format!(
        "  {} 기온 {} / 습도 {} (불쾌지수: {})\n",
        "외부 날씨:".bright_cyan(),
        optional_unit(report.weather.temperature, "℃"),
        optional_unit(report.weather.humidity, "%"),
        report.discomfort.level
    ));
    output.push_str(&format!(
        "  {} 미세먼지 {} ({})\n\n",
        "대기 상태:".bright_cyan(),
        report.air.pm10,
        report.air.grade.label()
    ));

    match (&report.congestion.reading, report.congestion.tier, report.congestion.narrative) {
        (CongestionReading::Measured { value, .. }, Some(tier), Some(narrative)) => {
            output.push_str(&render_tier(*value, tier, narrative));
        }
        (CongestionReading::OutOfServiceHours { .. }, _, _) => {
            output.push_str(&format!(
                "  {}\n",
                "[운행 종료] 지금은 운행 시간이 아닙니다.".bright_black()
            ));
        }
        _ => {
            output.push_str(&format!(
                "  {}\n",
                "[진단 불가] 이 역의 혼잡도 데이터가 없습니다.".bright_black()
            ));
        }
    }

    output
}

fn render_tier(value: f64, tier: CongestionTier, narrative: &TierNarrative) -> String {
    let headline = format!("[{}] 혼잡도 {:.1}%", narrative.headline, value);
    let headline = match tier {
        CongestionTier::High => headline.bright_red().bold(),
        CongestionTier::Moderate => headline.bright_yellow().bold(),
        CongestionTier::Comfortable => headline.bright_green().bold(),
    };

    let mut output = format!("  {}\n", headline);
    for (section, metric) in [("정신 건강", &narrative.mental), ("신체 건강", &narrative.physical)] {
        let note = metric
            .note
            .map(|note| format!(" ({})", note))
            .unwrap_or_default();
        output.push_str(&format!(
            "  {} {}: {}{}\n    {}\n",
            section.bright_cyan(),
            metric.name,
            metric.value.bright_white().bold(),
            note,
            metric.comment
        ));
    }
    output.push_str(&format!(
        "  {} {}\n",
        "처방:".bright_magenta().bold(),
        narrative.prescription
    ));
    output
}

fn render_briefing(briefing: &DailyBriefing) -> String {
    let mut output = format!("{}\n", "한눈에 보는 혼잡도 브리핑".bright_green().bold());

    output.push_str(&format!(
        "  {} {} ({}%)\n",
        "오늘의 최악:".bright_red(),
        briefing.peak.slot,
        briefing.peak.value
    ));
    output.push_str(&format!(
        "  {} {} ({}%)\n",
        "오늘의 천국:".bright_green(),
        briefing.trough.slot,
        briefing.trough.value
    ));

    let (golden_slot, golden_value) = match &briefing.golden {
        Some(reading) => (reading.slot.to_string(), reading.value),
        None => (NO_RECOMMENDATION_LABEL.to_string(), GOLDEN_WINDOW_CEILING),
    };
    output.push_str(&format!(
        "  {} {} ({}% 추천, {}시간 이내)\n\n",
        "곧 출발한다면?".bright_yellow(),
        golden_slot,
        golden_value,
        briefing.horizon_hours
    ));

    output.push_str(&render_series(&briefing.series));
    output
}

fn render_series(series: &DailySeries) -> String {
    let mut output = format!("  {}\n", "시간별 혼잡도(%)".bright_cyan());
    for point in series.points() {
        let width = ((point.value / BAR_UNIT).round().max(0.0) as usize).min(BAR_MAX_WIDTH);
        output.push_str(&format!(
            "  {:>8} {:>6.1} {}\n",
            point.slot.as_str(),
            point.value,
            "█".repeat(width).bright_red()
        ));
    }
    output
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn optional_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => "정보 없음".to_string(),
    }
}
