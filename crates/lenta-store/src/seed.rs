//! Fixed seed data the client boots with. Timestamps are relative to
//! "now" at load time, so the feed always looks fresh.

use chrono::{DateTime, Duration, Utc};

use lenta_types::models::{Story, User, avatar_url_for};

pub fn seed_users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "admin@lenta.ru".into(),
            username: "lenta_official".into(),
            display_name: "Лента".into(),
            bio: "Официальный аккаунт Лента 🚀".into(),
            avatar_url: avatar_url_for("official"),
            is_verified: true,
            last_seen: now,
        },
        User {
            id: 2,
            email: "anna@example.ru".into(),
            username: "anna_designer".into(),
            display_name: "Анна Иванова".into(),
            bio: "UI/UX дизайнер | Москва 🎨".into(),
            avatar_url: avatar_url_for("anna"),
            is_verified: true,
            last_seen: now - Duration::minutes(5),
        },
        User {
            id: 3,
            email: "dmitry@example.ru".into(),
            username: "dmitry_dev".into(),
            display_name: "Дмитрий Смирнов".into(),
            bio: "Full-stack разработчик 💻".into(),
            avatar_url: avatar_url_for("dmitry"),
            is_verified: false,
            last_seen: now - Duration::hours(2),
        },
        User {
            id: 4,
            email: "maria@example.ru".into(),
            username: "maria_photo".into(),
            display_name: "Мария Петрова".into(),
            bio: "Фотограф | Путешествия 📸".into(),
            avatar_url: avatar_url_for("maria"),
            is_verified: true,
            last_seen: now - Duration::hours(1),
        },
    ]
}

pub fn seed_stories(now: DateTime<Utc>) -> Vec<Story> {
    vec![
        Story {
            id: 1,
            user_id: 1,
            image_url: None,
            text: "Новые функции уже скоро! 🎉".into(),
            created_at: now,
            views: Some(234),
            viewers: Vec::new(),
        },
        Story {
            id: 2,
            user_id: 2,
            image_url: None,
            text: "Работаю над новым дизайном ✨".into(),
            created_at: now,
            views: Some(156),
            viewers: Vec::new(),
        },
        Story {
            id: 3,
            user_id: 3,
            image_url: None,
            text: "Запустил новый проект! Кто хочет протестировать? 🚀".into(),
            created_at: now - Duration::hours(1),
            views: Some(89),
            viewers: Vec::new(),
        },
        Story {
            id: 4,
            user_id: 4,
            image_url: None,
            text: "Сегодня отличная погода для фотосессии! ☀️📸".into(),
            created_at: now - Duration::hours(2),
            views: Some(142),
            viewers: Vec::new(),
        },
    ]
}
