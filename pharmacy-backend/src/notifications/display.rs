//! Plain-text rendering of the alert list.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_humanize::HumanTime;
use notification_center_types::{Notification, NotificationTab};
use std::fmt::Display;

/// Alerts older than this are shown with a calendar date instead of a relative phrase
const RELATIVE_WINDOW_DAYS: i64 = 7;

/// Options shared by every list rendering
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub show_actions: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: None,
            show_actions: true,
        }
    }
}

/// Human-friendly alert time, evaluated in `now`'s timezone:
/// clock time for today, a relative phrase within the last week,
/// otherwise month and day.
pub fn format_timestamp<Tz>(timestamp: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(&now.timezone());

    if local.date_naive() == now.date_naive() {
        return local.format("%-I:%M %p").to_string();
    }

    let age = now.clone().signed_duration_since(local.clone());
    if age < Duration::days(RELATIVE_WINDOW_DAYS) {
        return HumanTime::from(-age).to_string();
    }

    local.format("%b %-d").to_string()
}

/// First `limit` items, or all of them. A zero limit means no limit.
pub fn limit<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n > 0 => &items[..n.min(items.len())],
        _ => items,
    }
}

/// Text for the unread badge; hidden when there is nothing unread
pub fn unread_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

pub fn render_line<Tz>(
    notification: &Notification,
    now: &DateTime<Tz>,
    show_actions: bool,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let marker = if notification.read { ' ' } else { '*' };
    let mut line = format!(
        "{} #{} [{}] {}  {}: {}",
        marker,
        notification.id,
        notification.notification_type.label(),
        format_timestamp(notification.timestamp, now),
        notification.title,
        notification.message,
    );

    if show_actions && !notification.read {
        line.push_str("  (read ");
        line.push_str(&notification.id);
        line.push(')');
    }
    line
}

/// Render a tab view, including the tab's empty-state text
pub fn render_list<Tz>(
    notifications: &[&Notification],
    tab: NotificationTab,
    now: &DateTime<Tz>,
    options: ListOptions,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let shown = limit(notifications, options.limit);
    if shown.is_empty() {
        let (heading, hint) = tab.empty_state();
        return match hint {
            Some(hint) => format!("{}\n{}", heading, hint),
            None => heading.to_string(),
        };
    }

    shown
        .iter()
        .map(|n| render_line(n, now, options.show_actions))
        .collect::<Vec<_>>()
        .join("\n")
}
