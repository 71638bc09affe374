//! Plain-text rendering of race plans.
//!
//! Planning never writes to the console; callers render a `RacePlan`
//! with [`render_plan`] and print it however they like.

use crate::models::{format_duration, RacePlan, Roster};

const RULE: &str = "==============================================================";

/// Renders a plan as a stint table followed by per-driver totals.
///
/// ```text
/// ================ STINTS DESCRIPTION ==========================
///     Stint #1              |  Pedro   |  0:24:00
///     Stint #4 (ongoing)    |  Joe     |  0:16:00
/// ==============================================================
///     Pedro has been on track for  1:57:00
/// ==============================================================
/// ```
pub fn render_plan(plan: &RacePlan, roster: &Roster) -> String {
    let width = roster.iter().map(str::len).max().unwrap_or(0);
    let ongoing = plan.ongoing_index();
    let mut lines = vec!["================ STINTS DESCRIPTION ==========================".to_string()];

    for (idx, stint) in plan.full_race().iter().enumerate() {
        let label = if idx == ongoing && !plan.future.is_empty() {
            format!("Stint #{} (ongoing)", idx + 1)
        } else {
            format!("Stint #{}", idx + 1)
        };
        lines.push(format!(
            "    {label:<20}  |  {:<width$}  |  {}",
            stint.driver,
            format_duration(stint.duration)
        ));
    }
    lines.push(RULE.to_string());
    lines.extend(roster.iter().map(|driver| {
        format!(
            "    {driver:<width$} has been on track for  {}",
            format_duration(plan.drive_time(driver))
        )
    }));
    lines.push(RULE.to_string());
    lines.extend(
        plan.advisories
            .iter()
            .map(|advisory| format!("    ! {}", advisory.message)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Advisory, Stint};
    use chrono::{Duration, NaiveTime};

    fn plan() -> RacePlan {
        RacePlan {
            history: vec![Stint::minutes("Pedro", 24), Stint::minutes("Karim", 28)],
            future: vec![Stint::minutes("Joe", 16), Stint::minutes("Pedro", 30)],
            reference_time: NaiveTime::from_hms_opt(12, 44, 0).unwrap(),
            drivable_time: Duration::minutes(45),
            increments: 12,
            advisories: vec![Advisory::kart_runtime_exceeded(3, "Stint #4 is long")],
        }
    }

    #[test]
    fn test_render_marks_ongoing_stint() {
        let roster = Roster::new(["Pedro", "Karim", "Joe"]).unwrap();
        let text = render_plan(&plan(), &roster);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("STINTS DESCRIPTION"));
        assert!(lines[1].contains("Stint #1") && lines[1].contains("Pedro"));
        assert!(lines[1].contains("0:24:00"));
        assert!(!lines[1].contains("ongoing"));
        assert!(lines[3].contains("Stint #3 (ongoing)") && lines[3].contains("Joe"));
        assert!(!lines[4].contains("ongoing"));
    }

    #[test]
    fn test_render_driver_totals_and_advisories() {
        let roster = Roster::new(["Pedro", "Karim", "Joe"]).unwrap();
        let text = render_plan(&plan(), &roster);

        assert!(text.contains("Pedro has been on track for  0:54:00"));
        assert!(text.contains("Karim has been on track for  0:28:00"));
        assert!(text.contains("Joe   has been on track for  0:16:00"));
        assert!(text.contains("! Stint #4 is long"));
    }

    #[test]
    fn test_render_line_layout() {
        let roster = Roster::new(["Pedro", "Karim", "Joe"]).unwrap();
        let text = render_plan(&plan(), &roster);
        let lines: Vec<&str> = text.lines().collect();

        // header, 4 stints, rule, 3 totals, rule, 1 advisory
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[5], RULE);
        assert_eq!(lines[9], RULE);
        assert_eq!(lines[10], "    ! Stint #4 is long");
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
}
