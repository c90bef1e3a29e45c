use crate::domain::model::Fixture;
use crate::utils::error::Result;
use chrono::Datelike;

pub struct RenderOptions {
    /// The filtered team; decides whether the referee column is shown.
    pub team: String,
    /// Insert a heading row whenever the month changes.
    pub group_by_month: bool,
}

const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Static report page. Stylesheet and logo are referenced by relative
/// path so the page can be dropped next to the club assets.
pub fn render_html(fixtures: &[Fixture], opts: &RenderOptions) -> String {
    let mut page = String::new();

    page.push_str(concat!(
        "<!doctype html>\n",
        "<html lang=\"nl\">\n",
        "<head>\n",
        "  <meta charset=\"utf-8\">\n",
        "  <title>Zaalvoetbal schema</title>\n",
        "  <link rel=\"stylesheet\" href=\"zaalschema.css\">\n",
        "  <style>\n",
        "    table { border-collapse: collapse; width: 100%; }\n",
        "    td, th { border: 1px solid #dddddd; text-align: left; padding: 8px; }\n",
        "    tr:nth-child(even) { background-color: #dddddd; }\n",
        "  </style>\n",
        "</head>\n",
        "<body>\n",
        "<header><img src=\"logo.png\" alt=\"clublogo\"> <h1>Zaalvoetbal schema</h1></header>\n",
        "<table>\n",
        "<tr>\n",
        "<th>datum</th>\n",
        "<th>tijd</th>\n",
        "<th>thuis</th>\n",
        "<th>uit</th>\n",
        "<th>fluiten</th>\n",
        "</tr>\n",
    ));

    let mut current_month = None;
    for fixture in fixtures {
        if opts.group_by_month {
            let month = fixture.play.month();
            if current_month != Some(month) {
                current_month = Some(month);
                page.push_str(&format!(
                    "<tr class=\"maand\"><th colspan=\"5\">{}</th></tr>\n",
                    MONTH_NAMES[month as usize - 1]
                ));
            }
        }

        // Referee time is only relevant when our team has the home duty.
        let referee = if fixture.plays_at_home(&opts.team) {
            fixture.referee.format("%H:%M").to_string()
        } else {
            String::new()
        };

        page.push_str("<tr>\n");
        page.push_str(&format!("<td>{}</td>\n", fixture.play.format("%d/%m")));
        page.push_str(&format!("<td>{}</td>\n", fixture.play.format("%H:%M")));
        page.push_str(&format!("<td>{}</td>\n", escape_html(&fixture.home)));
        page.push_str(&format!("<td>{}</td>\n", escape_html(&fixture.away)));
        page.push_str(&format!("<td>{}</td>\n", referee));
        page.push_str("</tr>\n");
    }

    page.push_str("</table>\n</body>\n</html>\n");
    page
}

/// Machine-readable variant of the same report.
pub fn render_json(fixtures: &[Fixture]) -> Result<String> {
    Ok(serde_json::to_string_pretty(fixtures)?)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture(m: u32, d: u32, home: &str, away: &str) -> Fixture {
        let play = NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap();
        let referee = NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(21, 15, 0)
            .unwrap();
        Fixture {
            play,
            referee,
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    fn opts() -> RenderOptions {
        RenderOptions {
            team: "Seedorf".to_string(),
            group_by_month: false,
        }
    }

    #[test]
    fn test_empty_schedule_renders_page_shell_only() {
        let page = render_html(&[], &opts());
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<th>fluiten</th>"));
        // Header row only, no fixture rows.
        assert_eq!(page.matches("<tr>").count(), 1);
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_one_row_per_fixture_in_input_order() {
        let fixtures = vec![
            fixture(3, 19, "Ajax", "Seedorf"),
            fixture(3, 12, "Seedorf", "Zeeburgia"),
        ];
        let page = render_html(&fixtures, &opts());

        assert_eq!(page.matches("<tr>").count(), 3); // header + 2 fixtures
        let first = page.find("19/03").unwrap();
        let second = page.find("12/03").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_referee_time_shown_only_for_home_fixtures() {
        let home = fixture(3, 12, "Seedorf", "Ajax");
        let away = fixture(3, 19, "Ajax", "Seedorf");
        let page = render_html(&[home, away], &opts());

        assert_eq!(page.matches("<td>21:15</td>").count(), 1);
        assert_eq!(page.matches("<td></td>").count(), 1);
    }

    #[test]
    fn test_home_check_ignores_case() {
        let page = render_html(
            &[fixture(3, 12, "SEEDORF 2", "Ajax")],
            &RenderOptions {
                team: "seedorf".to_string(),
                group_by_month: false,
            },
        );
        assert!(page.contains("<td>21:15</td>"));
    }

    #[test]
    fn test_month_headings_emitted_on_change() {
        let fixtures = vec![
            fixture(3, 12, "Seedorf", "Ajax"),
            fixture(3, 19, "Seedorf", "Zeeburgia"),
            fixture(4, 2, "Seedorf", "De Meer"),
        ];
        let page = render_html(
            &fixtures,
            &RenderOptions {
                team: "Seedorf".to_string(),
                group_by_month: true,
            },
        );

        assert_eq!(page.matches("class=\"maand\"").count(), 2);
        assert!(page.contains(">maart</th>"));
        assert!(page.contains(">april</th>"));
    }

    #[test]
    fn test_no_month_headings_by_default() {
        let fixtures = vec![fixture(3, 12, "Seedorf", "Ajax"), fixture(4, 2, "Seedorf", "Ajax")];
        let page = render_html(&fixtures, &opts());
        assert!(!page.contains("class=\"maand\""));
    }

    #[test]
    fn test_team_names_are_escaped() {
        let page = render_html(&[fixture(3, 12, "Seedorf", "Duno & Zn. <A>")], &opts());
        assert!(page.contains("Duno &amp; Zn. &lt;A&gt;"));
        assert!(!page.contains("<A>"));
    }

    #[test]
    fn test_json_output_one_object_per_fixture() {
        let fixtures = vec![fixture(3, 12, "Seedorf", "Ajax")];
        let json = render_json(&fixtures).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["home"], "Seedorf");
        assert_eq!(rows[0]["away"], "Ajax");
    }
}
