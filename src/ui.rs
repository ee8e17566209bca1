use crate::models::{Entry, EntryKind, TrackerSnapshot};
use std::fmt::Write;

pub fn render_index(snapshot: &TrackerSnapshot) -> String {
    let summary = &snapshot.summary;
    let danger = if summary.over_limit { " danger" } else { "" };
    INDEX_HTML
        .replace("{{LIMIT}}", &summary.calorie_limit.to_string())
        .replace("{{TOTAL}}", &format_kcal(summary.total))
        .replace("{{CONSUMED}}", &format_kcal(summary.consumed))
        .replace("{{BURNED}}", &format_kcal(summary.burned))
        .replace("{{REMAINING}}", &format_kcal(summary.remaining))
        .replace("{{PROGRESS}}", &format!("{:.1}", summary.progress))
        .replace("{{DANGER}}", danger)
        .replace("{{MEAL_ITEMS}}", &render_items(EntryKind::Meal, &snapshot.meals))
        .replace(
            "{{WORKOUT_ITEMS}}",
            &render_items(EntryKind::Workout, &snapshot.workouts),
        )
}

fn render_items(kind: EntryKind, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return format!(r#"<p class="empty">No {} logged yet.</p>"#, kind.plural());
    }

    let mut html = String::new();
    for entry in entries {
        let id = escape_html(entry.id().as_str());
        let _ = write!(
            html,
            r#"
        <li class="item {kind}" data-id="{id}">
          <span class="item-name">{name}</span>
          <span class="item-calories">{calories}</span>
          <form class="delete-form" method="post" action="/{plural}/{id}/delete">
            <button class="delete" type="submit" aria-label="Delete">&times;</button>
          </form>
        </li>"#,
            kind = kind.as_str(),
            plural = kind.plural(),
            name = escape_html(entry.name()),
            calories = format_kcal(entry.calories()),
        );
    }
    html
}

/// Calories to one decimal place, dropping a trailing `.0`.
fn format_kcal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // Keeps names from forming template placeholders.
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calorie Tracker</title>
  <style>
    :root {
      --bg-1: #f3f6ee;
      --ink: #26302a;
      --accent: #2f855a;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #e3efe0 60%, #f6f8f2 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8580;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat.remaining.danger {
      background: var(--danger);
    }

    .stat.remaining.danger .label,
    .stat.remaining.danger .value {
      color: white;
    }

    .progress {
      height: 22px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-bar {
      height: 100%;
      background: var(--accent);
      transition: width 200ms ease;
    }

    .progress-bar.danger {
      background: var(--danger);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 24px;
    }

    details {
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    summary {
      cursor: pointer;
      font-weight: 600;
    }

    .entry-form {
      display: grid;
      gap: 10px;
      margin-top: 12px;
    }

    input {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    ul {
      list-style: none;
      padding: 0;
      margin: 12px 0 0;
      display: grid;
      gap: 10px;
    }

    .item {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 14px;
      padding: 10px 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .item-name {
      flex: 1;
    }

    .item-calories {
      font-weight: 600;
      color: white;
      background: var(--accent-2);
      border-radius: 8px;
      padding: 4px 12px;
    }

    .item.workout .item-calories {
      background: #6b645d;
    }

    .delete-form {
      margin: 0;
    }

    .delete {
      background: var(--danger);
      padding: 4px 10px;
    }

    .empty {
      color: #7b8580;
      margin: 12px 0 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Calorie Tracker</h1>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Daily limit</span>
        <span id="calories-limit" class="value">{{LIMIT}}</span>
      </div>
      <div class="stat">
        <span class="label">Gain/Loss</span>
        <span id="calories-total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Consumed</span>
        <span id="calories-consumed" class="value">{{CONSUMED}}</span>
      </div>
      <div class="stat">
        <span class="label">Burned</span>
        <span id="calories-burned" class="value">{{BURNED}}</span>
      </div>
      <div class="stat remaining{{DANGER}}">
        <span class="label">Remaining</span>
        <span id="calories-remaining" class="value">{{REMAINING}}</span>
      </div>
    </section>

    <div class="progress">
      <div id="calorie-progress" class="progress-bar{{DANGER}}" style="width: {{PROGRESS}}%"></div>
    </div>

    <section class="columns">
      <div>
        <details id="collapse-meal">
          <summary>Add meal</summary>
          <form id="meal-form" class="entry-form" method="post" action="/meals">
            <input id="meal-name" name="name" placeholder="Meal" autocomplete="off" />
            <input id="meal-calories" name="calories" type="number" step="any" placeholder="Calories" />
            <button type="submit">Add meal</button>
          </form>
        </details>
        <ul id="meal-items">{{MEAL_ITEMS}}
        </ul>
      </div>
      <div>
        <details id="collapse-workout">
          <summary>Add workout</summary>
          <form id="workout-form" class="entry-form" method="post" action="/workouts">
            <input id="workout-name" name="name" placeholder="Workout" autocomplete="off" />
            <input id="workout-calories" name="calories" type="number" step="any" placeholder="Calories" />
            <button type="submit">Add workout</button>
          </form>
        </details>
        <ul id="workout-items">{{WORKOUT_ITEMS}}
        </ul>
      </div>
    </section>
  </main>

  <script>
    ['meal', 'workout'].forEach((type) => {
      const form = document.getElementById(`${type}-form`);
      form.addEventListener('submit', (event) => {
        const name = document.getElementById(`${type}-name`).value.trim();
        const calories = document.getElementById(`${type}-calories`).value.trim();
        if (name === '' || calories === '') {
          event.preventDefault();
          alert('Please fill in all fields');
        }
      });
    });

    document.querySelectorAll('.delete-form').forEach((form) => {
      form.addEventListener('submit', (event) => {
        if (!confirm('Are you sure you want to delete this item?')) {
          event.preventDefault();
        }
      });
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;
    use crate::tracker::CalorieTracker;

    #[test]
    fn renders_totals_and_items() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(EntryId::new("a1"), "Lunch", 800.0));
        tracker.add_workout(Entry::new(EntryId::new("b2"), "Run", 300.0));

        let html = render_index(&tracker.snapshot());
        assert!(html.contains(r#"<span id="calories-total" class="value">500</span>"#));
        assert!(html.contains(r#"<span id="calories-remaining" class="value">1500</span>"#));
        assert!(html.contains("width: 25.0%"));
        assert!(html.contains(r#"action="/meals/a1/delete""#));
        assert!(html.contains(r#"action="/workouts/b2/delete""#));
        assert!(!html.contains("{{"));
        assert!(!html.contains(r#"stat remaining danger"#));
    }

    #[test]
    fn over_limit_uses_danger_styling() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(EntryId::new("1"), "Feast", 2200.0));
        let html = render_index(&tracker.snapshot());
        assert!(html.contains(r#"class="stat remaining danger""#));
        assert!(html.contains(r#"class="progress-bar danger""#));
        assert!(html.contains("width: 100.0%"));
    }

    #[test]
    fn danger_styling_clears_after_removal() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(EntryId::new("1"), "Lunch", 800.0));
        tracker.add_meal(Entry::new(EntryId::new("2"), "Dinner", 1700.0));
        assert!(render_index(&tracker.snapshot()).contains(r#"class="progress-bar danger""#));

        tracker.remove_meal(&EntryId::new("1"));
        let html = render_index(&tracker.snapshot());
        assert!(html.contains(r#"class="stat remaining""#));
        assert!(html.contains(r#"class="progress-bar""#));
        assert!(!html.contains(r#"class="progress-bar danger""#));
        assert!(!html.contains(r#"class="stat remaining danger""#));
        assert!(html.contains("width: 85.0%"));
    }

    #[test]
    fn fractional_calories_render_to_one_decimal() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(EntryId::new("1"), "Toast", 0.1));
        tracker.add_meal(Entry::new(EntryId::new("2"), "Snack", 250.5));
        let html = render_index(&tracker.snapshot());
        assert!(html.contains(r#"<span class="item-calories">250.5</span>"#));
        assert!(html.contains(r#"<span id="calories-consumed" class="value">250.6</span>"#));
        assert_eq!(format_kcal(0.1 + 0.2), "0.3");
        assert_eq!(format_kcal(800.0), "800");
        assert_eq!(format_kcal(-0.0), "0");
    }

    #[test]
    fn empty_lists_show_placeholder() {
        let html = render_index(&CalorieTracker::default().snapshot());
        assert!(html.contains("No meals logged yet."));
        assert!(html.contains("No workouts logged yet."));
    }

    #[test]
    fn names_are_escaped() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(
            EntryId::new("1"),
            r#"<script>alert("x")</script>"#,
            10.0,
        ));
        let html = render_index(&tracker.snapshot());
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(!html.contains(r#"<script>alert("x")"#));
    }

    #[test]
    fn names_cannot_inject_placeholders() {
        let mut tracker = CalorieTracker::default();
        tracker.add_meal(Entry::new(EntryId::new("1"), "{{WORKOUT_ITEMS}}", 10.0));
        tracker.add_workout(Entry::new(EntryId::new("2"), "Run", 300.0));
        let html = render_index(&tracker.snapshot());
        assert_eq!(html.matches(r#"data-id="2""#).count(), 1);
        assert!(html.contains("&#123;&#123;WORKOUT_ITEMS}}"));
    }
}
