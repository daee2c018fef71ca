//! NotificationStore: owner of the notification center's alert list
//!
//! Holds the ordered collection, applies read/dismiss mutations, and derives
//! the unread badge and tab views on every call. Nothing derived is cached,
//! so a view can never lag behind the last mutation.

use std::collections::HashSet;

use notification_center_types::{
    Notification, NotificationSnapshot, NotificationTab, NotificationType,
};

use super::filters::{is_unread, KeywordCategory};

/// In-memory notification store. Exactly one owner mutates it.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Build the store from a seed feed, preserving seed order.
    ///
    /// Ids must be unique; a repeated id keeps its first occurrence.
    pub fn new(seed: Vec<Notification>) -> Self {
        let mut seen = HashSet::with_capacity(seed.len());
        let mut notifications = Vec::with_capacity(seed.len());

        for notification in seed {
            if seen.insert(notification.id.clone()) {
                notifications.push(notification);
            } else {
                log::warn!(
                    "[NOTIFICATIONS] Dropping seed notification with duplicate id {}",
                    notification.id
                );
            }
        }

        log::info!(
            "[NOTIFICATIONS] Loaded {} notifications ({} unread)",
            notifications.len(),
            notifications.iter().filter(|n| is_unread(n)).count()
        );

        Self { notifications }
    }

    /// Full collection, in store order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Number of unread notifications, recounted on every call
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| is_unread(n)).count()
    }

    pub fn has_unread(&self) -> bool {
        self.notifications.iter().any(is_unread)
    }

    /// Mark one notification as read.
    ///
    /// Unknown ids are ignored. Returns true only if the record was unread.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                log::debug!("[NOTIFICATIONS] Marked {} as read", id);
                true
            }
            Some(_) => false,
            None => {
                log::debug!("[NOTIFICATIONS] mark_as_read: no notification {}", id);
                false
            }
        }
    }

    /// Mark every notification as read. Returns how many flipped.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            flipped += 1;
        }

        if flipped > 0 {
            log::info!("[NOTIFICATIONS] All notifications marked as read ({} updated)", flipped);
        }
        flipped
    }

    /// Permanently remove a notification. Unknown ids are ignored.
    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        match self.notifications.iter().position(|n| n.id == id) {
            Some(index) => {
                // `remove` keeps the relative order of the remaining records
                self.notifications.remove(index);
                log::debug!("[NOTIFICATIONS] Dismissed {}", id);
                true
            }
            None => {
                log::debug!("[NOTIFICATIONS] dismiss_notification: no notification {}", id);
                false
            }
        }
    }

    /// Unread notifications, in store order
    pub fn unread(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| is_unread(n)).collect()
    }

    /// Notifications whose message contains `keyword` (any case) and whose
    /// severity is one of `types`
    pub fn by_keyword(&self, keyword: &str, types: &[NotificationType]) -> Vec<&Notification> {
        self.by_category(&KeywordCategory::new(keyword, types))
    }

    pub fn by_category(&self, category: &KeywordCategory) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| category.matches(n))
            .collect()
    }

    /// Records listed under a notification center tab
    pub fn view(&self, tab: NotificationTab) -> Vec<&Notification> {
        match tab {
            NotificationTab::All => self.notifications.iter().collect(),
            NotificationTab::Unread => self.unread(),
            NotificationTab::Stock => self.by_category(&KeywordCategory::low_stock()),
            NotificationTab::Expiry => self.by_category(&KeywordCategory::expiry()),
        }
    }

    pub fn snapshot(&self) -> NotificationSnapshot {
        NotificationSnapshot {
            notifications: self.notifications.clone(),
            unread_count: self.unread_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn ids(view: &[&Notification]) -> Vec<String> {
        view.iter().map(|n| n.id.clone()).collect()
    }

    fn scenario_seed() -> Vec<Notification> {
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        vec![
            Notification::new(
                "1",
                "Low Stock Alert",
                "Paracetamol stock is below 5 units",
                NotificationType::Warning,
                now - Duration::minutes(20),
            ),
            Notification::new(
                "2",
                "Expiry Alert",
                "Ibuprofen expired yesterday",
                NotificationType::Danger,
                now - Duration::hours(2),
            ),
            Notification::new(
                "4",
                "New Supplier",
                "New supplier added",
                NotificationType::Info,
                now - Duration::days(1),
            )
            .with_read(true),
        ]
    }

    fn scenario_seed_with_vitamin_c() -> Vec<Notification> {
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let mut seed = scenario_seed();
        seed.push(
            Notification::new(
                "5",
                "Expiry Alert",
                "Vitamin C will expire in 7 days",
                NotificationType::Warning,
                now - Duration::days(2),
            )
            .with_read(true),
        );
        seed
    }

    #[test]
    fn test_mark_as_read_flips_only_target() {
        let mut store = NotificationStore::new(scenario_seed());
        let before = store.notifications().to_vec();
        let unread_before = store.unread_count();

        assert!(store.mark_as_read("2"));

        assert!(store.get("2").unwrap().read);
        assert_eq!(store.unread_count(), unread_before - 1);
        for (old, new) in before.iter().zip(store.notifications()) {
            if old.id != "2" {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_mark_as_read_on_read_record_keeps_count() {
        let mut store = NotificationStore::new(scenario_seed());
        assert!(!store.mark_as_read("4"));
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_mark_as_read_is_idempotent() {
        let mut once = NotificationStore::new(scenario_seed());
        once.mark_as_read("1");

        let mut twice = NotificationStore::new(scenario_seed());
        assert!(twice.mark_as_read("1"));
        assert!(!twice.mark_as_read("1"));

        assert_eq!(once.notifications(), twice.notifications());
    }

    #[test]
    fn test_mark_all_as_read_zeroes_unread() {
        let mut store = NotificationStore::new(scenario_seed());
        assert_eq!(store.mark_all_as_read(), 2);
        assert_eq!(store.unread_count(), 0);
        assert!(!store.has_unread());

        // second call changes nothing
        assert_eq!(store.mark_all_as_read(), 0);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(ids(&store.view(NotificationTab::All)), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_mark_all_as_read_on_empty_store() {
        let mut store = NotificationStore::default();
        assert_eq!(store.mark_all_as_read(), 0);
        assert_eq!(store.unread_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_dismiss_removes_exactly_one_and_keeps_order() {
        let mut store = NotificationStore::new(scenario_seed_with_vitamin_c());
        assert_eq!(store.len(), 4);

        assert!(store.dismiss_notification("2"));
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store.view(NotificationTab::All)), vec!["1", "4", "5"]);

        assert!(!store.dismiss_notification("2"));
        assert_eq!(store.len(), 3);
        assert!(store.get("2").is_none());
    }

    #[test]
    fn test_unknown_id_leaves_store_untouched() {
        let mut store = NotificationStore::new(scenario_seed());
        let before = store.notifications().to_vec();

        assert!(!store.mark_as_read("missing"));
        assert!(!store.dismiss_notification("missing"));

        assert_eq!(store.notifications(), before.as_slice());
    }

    #[test]
    fn test_read_then_dismiss_scenario() {
        let mut store = NotificationStore::new(scenario_seed());
        assert_eq!(store.unread_count(), 2);

        store.mark_as_read("1");
        assert_eq!(store.unread_count(), 1);
        assert!(store.get("1").unwrap().read);
        assert!(!store.get("2").unwrap().read);
        assert_eq!(store.get("2").unwrap().message, "Ibuprofen expired yesterday");

        store.dismiss_notification("2");
        assert_eq!(ids(&store.view(NotificationTab::All)), vec!["1", "4"]);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_category_views() {
        let store = NotificationStore::new(scenario_seed_with_vitamin_c());

        assert_eq!(ids(&store.view(NotificationTab::Expiry)), vec!["2", "5"]);
        assert_eq!(ids(&store.view(NotificationTab::Stock)), vec!["1"]);
        assert_eq!(ids(&store.view(NotificationTab::Unread)), vec!["1", "2"]);
        assert_eq!(
            ids(&store.by_keyword("EXPIR", &[NotificationType::Danger])),
            vec!["2"]
        );
    }

    #[test]
    fn test_views_track_mutations() {
        let mut store = NotificationStore::new(scenario_seed_with_vitamin_c());
        store.dismiss_notification("5");
        assert_eq!(ids(&store.view(NotificationTab::Expiry)), vec!["2"]);

        store.mark_all_as_read();
        assert!(store.view(NotificationTab::Unread).is_empty());
        // category views ignore read state
        assert_eq!(ids(&store.view(NotificationTab::Stock)), vec!["1"]);
    }

    #[test]
    fn test_duplicate_seed_ids_keep_first() {
        let mut seed = scenario_seed();
        let mut dup = seed[0].clone();
        dup.title = "Impostor".to_string();
        seed.push(dup);

        let store = NotificationStore::new(seed);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("1").unwrap().title, "Low Stock Alert");
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut store = NotificationStore::new(scenario_seed());
        store.mark_as_read("2");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.unread_count, 1);
        assert_eq!(snapshot.notifications, store.notifications());
    }
}
