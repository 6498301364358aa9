use crate::models::{DayRecord, MoodEntry};

pub fn render_index(days: usize, entries: usize, latest: Option<f64>) -> String {
    let latest = latest
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "--".to_string());
    let content = INDEX_CONTENT
        .replace("{{DAYS}}", &days.to_string())
        .replace("{{ENTRIES}}", &entries.to_string())
        .replace("{{LATEST}}", &latest);
    page(
        "Mood Journal",
        "Log how you feel and watch the trend.",
        &content,
        INDEX_SCRIPT,
    )
}

pub fn render_day(day: &DayRecord) -> String {
    let rows: String = day
        .entries
        .iter()
        .map(|entry| {
            let time = if entry.time.is_empty() {
                "N/A".to_string()
            } else {
                escape(&entry.time)
            };
            format!(
                "<tr><td>{time}</td><td>{mood}</td><td>{notes}</td><td><a class=\"edit-link\" href=\"/entry?date={date}&amp;id={id}\">Edit</a></td></tr>",
                mood = format_mood(entry.mood),
                notes = escape(&entry.notes),
                date = escape(&day.date),
                id = entry.id,
            )
        })
        .collect();

    let content = DAY_CONTENT.replace("{{ROWS}}", &rows);
    page(
        &format!("Mood Details for {}", escape(&day.date)),
        "Every entry logged for this day.",
        &content,
        "",
    )
}

pub fn render_entry_form(date: &str, time: &str) -> String {
    form_page("Log Mood Data", date, time, "", "", "")
}

pub fn render_edit_form(date: &str, entry: &MoodEntry) -> String {
    let edit_fields = format!(
        "<input type=\"hidden\" name=\"edit_date\" value=\"{date}\" /><input type=\"hidden\" name=\"edit_id\" value=\"{id}\" />",
        date = escape(date),
        id = entry.id,
    );
    form_page(
        "Edit Mood Data",
        date,
        &entry.time,
        &format_mood(entry.mood),
        &entry.notes,
        &edit_fields,
    )
}

pub fn render_missing_day() -> String {
    MISSING_DAY_HTML.to_string()
}

fn form_page(
    title: &str,
    date: &str,
    time: &str,
    mood: &str,
    notes: &str,
    edit_fields: &str,
) -> String {
    let content = FORM_CONTENT
        .replace("{{DATE}}", &escape(date))
        .replace("{{TIME}}", &escape(time))
        .replace("{{MOOD}}", &escape(mood))
        .replace("{{NOTES}}", &escape(notes))
        .replace("{{EDIT_FIELDS}}", edit_fields);
    page(title, "One moment, one score, a few words.", &content, "")
}

fn page(title: &str, subtitle: &str, content: &str, script: &str) -> String {
    PAGE_SHELL
        .replace("{{TITLE}}", title)
        .replace("{{SUBTITLE}}", subtitle)
        .replace("{{CONTENT}}", content)
        .replace("{{SCRIPT}}", script)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn format_mood(mood: f64) -> String {
    if mood.fract() == 0.0 {
        format!("{mood:.0}")
    } else {
        mood.to_string()
    }
}

const PAGE_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    body[data-theme="dark"] {
      --bg: #121212;
      --ink: #E0E0E0;
      --muted: #9a9a9a;
      --card: #1E1E1E;
      --field: #333333;
      --accent: #03DAC5;
      --accent-ink: #121212;
      --line: #D4BFFF;
      --border: rgba(224, 224, 224, 0.08);
    }

    body[data-theme="light"] {
      --bg: #F5F5F7;
      --ink: #3C3C3C;
      --muted: #6f6a65;
      --card: #FFF7E6;
      --field: #CFFFE5;
      --accent: #D4BFFF;
      --accent-ink: #121212;
      --line: #D4BFFF;
      --border: rgba(60, 60, 60, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 200ms ease, color 200ms ease;
    }

    .app {
      width: min(860px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    .masthead {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid var(--border);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
    }

    .stat .value.accent {
      color: var(--accent);
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .chart-card {
      background: var(--card);
      border-radius: 20px;
      padding: 16px;
      border: 1px solid var(--border);
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--line);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--line);
      stroke-width: 2;
      cursor: pointer;
    }

    .chart-point:hover {
      fill: var(--line);
    }

    .chart-grid {
      stroke: var(--border);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .table-card {
      background: var(--card);
      border-radius: 20px;
      padding: 8px 16px 16px;
      border: 1px solid var(--border);
      overflow-x: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 10px 12px;
      border-bottom: 1px solid var(--border);
    }

    th {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    form {
      background: var(--card);
      border-radius: 20px;
      padding: 24px;
      border: 1px solid var(--border);
      display: grid;
      gap: 10px;
    }

    label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    input, textarea {
      background: var(--field);
      color: var(--ink);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    textarea {
      resize: vertical;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button, .button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: var(--accent-ink);
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      transition: transform 150ms ease;
    }

    button:active, .button:active {
      transform: scale(0.98);
    }

    .button.ghost {
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--border);
    }

    .edit-link {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
    }

    .theme-toggle {
      padding: 8px 16px;
      font-size: 0.85rem;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #CF6679;
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    @media (max-width: 600px) {
      button, .button {
        width: 100%;
      }
    }
  </style>
</head>
<body data-theme="dark">
  <main class="app">
    <header>
      <div class="masthead">
        <h1>{{TITLE}}</h1>
        <button class="theme-toggle" id="theme-toggle" type="button">Toggle theme</button>
      </div>
      <p class="subtitle">{{SUBTITLE}}</p>
    </header>
    {{CONTENT}}
  </main>
  <script>
    const themeToggle = document.getElementById('theme-toggle');

    const applyTheme = (theme) => {
      document.body.dataset.theme = theme;
    };

    applyTheme(localStorage.getItem('theme') || 'dark');

    if (themeToggle) {
      themeToggle.addEventListener('click', () => {
        const next = document.body.dataset.theme === 'dark' ? 'light' : 'dark';
        applyTheme(next);
        localStorage.setItem('theme', next);
      });
    }
  </script>
  {{SCRIPT}}
</body>
</html>
"#;

const INDEX_CONTENT: &str = r#"<section class="panel">
      <div class="stat">
        <span class="label">Days logged</span>
        <span class="value">{{DAYS}}</span>
      </div>
      <div class="stat">
        <span class="label">Entries</span>
        <span class="value">{{ENTRIES}}</span>
      </div>
      <div class="stat">
        <span class="label">Latest average</span>
        <span class="value accent">{{LATEST}}</span>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <div>
          <h2>Average mood by day</h2>
          <p class="subtitle">Click a point to see that day in detail.</p>
        </div>
        <a class="button" href="/entry">Log mood</a>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 280" aria-label="Average mood chart" role="img"></svg>
      </div>
    </section>

    <div class="status" id="status"></div>"#;

const INDEX_SCRIPT: &str = r#"<script>
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No mood data yet</text>';
        return;
      }

      const width = 600;
      const height = 280;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const min = 0;
      const max = 10;
      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.average).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" data-date="${point.date}" cx="${x(index)}" cy="${y(point.average)}" r="5"><title>${point.date}: ${point.average.toFixed(2)}</title></circle>`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;

      chartEl.querySelectorAll('.chart-point').forEach((circle) => {
        circle.addEventListener('click', () => {
          location.href = `/day?date=${circle.dataset.date}`;
        });
      });
    };

    const loadAverages = async () => {
      const res = await fetch('/api/averages');
      if (!res.ok) {
        throw new Error('Unable to load averages');
      }
      const points = (await res.json()).filter((point) => point.average !== null);
      renderChart(points);
    };

    if (new URLSearchParams(location.search).get('notice') === 'saved') {
      setStatus('Mood entry saved', 'ok');
      setTimeout(() => setStatus('', ''), 2000);
    }

    loadAverages().catch((err) => setStatus(err.message, 'error'));
  </script>"#;

const DAY_CONTENT: &str = r#"<section class="table-card">
      <table id="mood-table">
        <thead>
          <tr><th>Time</th><th>Mood</th><th>Notes</th><th></th></tr>
        </thead>
        <tbody>{{ROWS}}</tbody>
      </table>
    </section>

    <section class="actions">
      <a class="button" href="/entry">Log another entry</a>
      <a class="button ghost" href="/">Back to the chart</a>
    </section>"#;

const FORM_CONTENT: &str = r#"<form id="mood-form" method="post" action="/entry">
      <label for="date">Date</label>
      <input type="date" id="date" name="date" value="{{DATE}}" required />
      <label for="time">Time</label>
      <input type="time" id="time" name="time" value="{{TIME}}" required />
      <label for="mood">Mood (0-10)</label>
      <input type="number" id="mood" name="mood" min="0" max="10" step="0.1" value="{{MOOD}}" required />
      <label for="notes">Notes</label>
      <textarea id="notes" name="notes" rows="4" placeholder="Anything worth remembering?">{{NOTES}}</textarea>
      {{EDIT_FIELDS}}
      <button type="submit">Save Entry</button>
    </form>

    <section class="actions">
      <a class="button ghost" href="/">Back to the chart</a>
    </section>"#;

const MISSING_DAY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Mood Journal</title>
</head>
<body>
  <script>
    alert('No data available for the selected date.');
    location.replace('/');
  </script>
  <p>No data available for the selected date. <a href="/">Back to the chart</a></p>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_rows_link_each_entry_by_id() {
        let day = DayRecord {
            date: "2024-10-09".to_string(),
            entries: vec![MoodEntry::new("20:00".to_string(), 5.0, String::new())],
        };

        let html = render_day(&day);
        assert!(html.contains(&format!(
            "/entry?date=2024-10-09&amp;id={}",
            day.entries[0].id
        )));
        assert!(html.contains("<td>20:00</td>"));
    }

    #[test]
    fn notes_are_escaped_in_rendered_pages() {
        let entry = MoodEntry::new(
            "20:00".to_string(),
            5.0,
            "<script>alert('x')</script>".to_string(),
        );
        let day = DayRecord {
            date: "2024-10-09".to_string(),
            entries: vec![entry.clone()],
        };

        assert!(!render_day(&day).contains("<script>alert"));
        assert!(!render_edit_form("2024-10-09", &entry).contains("<script>alert"));
    }

    #[test]
    fn edit_form_carries_hidden_target_fields() {
        let entry = MoodEntry::new("08:15".to_string(), 6.5, "slow start".to_string());
        let html = render_edit_form("2024-10-09", &entry);

        assert!(html.contains("Edit Mood Data"));
        assert!(html.contains("name=\"edit_date\" value=\"2024-10-09\""));
        assert!(html.contains(&format!("name=\"edit_id\" value=\"{}\"", entry.id)));
        assert!(html.contains("value=\"6.5\""));
    }

    #[test]
    fn blank_form_has_no_edit_fields() {
        let html = render_entry_form("2024-10-09", "07:45");
        assert!(html.contains("Log Mood Data"));
        assert!(!html.contains("edit_id"));
    }
}
