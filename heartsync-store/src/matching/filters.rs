use crate::models::{FilterSettings, User};

/// Whether `user` survives every discovery criterion in `filters`.
///
/// Criteria are ANDed. An empty gender set or an empty language set places no
/// restriction; a user without a gender attribute never matches a non-empty
/// gender set.
pub fn passes_filters(user: &User, filters: &FilterSettings) -> bool {
    if !filters.gender.is_empty() {
        let gender = user.gender().unwrap_or_default();
        if !filters.gender.iter().any(|g| g == gender) {
            return false;
        }
    }

    let (min_age, max_age) = filters.age_range;
    if user.age < min_age || user.age > max_age {
        return false;
    }

    if user.distance > filters.distance {
        return false;
    }

    if !filters.languages.is_empty() && !user.speaks_any(&filters.languages) {
        return false;
    }

    true
}

/// Keeps the users of `pool` that pass, in their original order.
pub fn filter_users(pool: &[User], filters: &FilterSettings) -> Vec<User> {
    pool.iter()
        .filter(|u| passes_filters(u, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserDetails;

    fn user(id: &str, age: u32, distance: f64, gender: Option<&str>, langs: &[&str]) -> User {
        User {
            id: id.to_string(),
            name: format!("User {id}"),
            age,
            bio: String::new(),
            occupation: String::new(),
            location: String::new(),
            distance,
            photos: vec![format!("{id}.jpg")],
            interests: vec![],
            languages: langs.iter().map(|l| l.to_string()).collect(),
            details: UserDetails {
                gender: gender.map(str::to_string),
                ..Default::default()
            },
            verified: None,
            pronouns: None,
            is_online: None,
            email: None,
        }
    }

    fn open_filters() -> FilterSettings {
        FilterSettings {
            gender: vec![],
            age_range: (18, 80),
            distance: 100.0,
            show_nearby_when_empty: true,
            languages: vec![],
        }
    }

    #[test]
    fn age_range_is_inclusive() {
        let filters = FilterSettings { age_range: (25, 30), ..open_filters() };
        assert!(passes_filters(&user("a", 25, 1.0, None, &[]), &filters));
        assert!(passes_filters(&user("b", 30, 1.0, None, &[]), &filters));
        assert!(!passes_filters(&user("c", 24, 1.0, None, &[]), &filters));
        assert!(!passes_filters(&user("d", 31, 1.0, None, &[]), &filters));
    }

    #[test]
    fn distance_is_inclusive() {
        let filters = FilterSettings { distance: 10.0, ..open_filters() };
        assert!(passes_filters(&user("a", 30, 10.0, None, &[]), &filters));
        assert!(!passes_filters(&user("b", 30, 10.5, None, &[]), &filters));
    }

    #[test]
    fn empty_gender_set_places_no_restriction() {
        let filters = open_filters();
        assert!(passes_filters(&user("a", 30, 1.0, None, &[]), &filters));
        assert!(passes_filters(&user("b", 30, 1.0, Some("Male"), &[]), &filters));
    }

    #[test]
    fn missing_gender_fails_non_empty_set() {
        let filters = FilterSettings { gender: vec!["Female".into()], ..open_filters() };
        assert!(!passes_filters(&user("a", 30, 1.0, None, &[]), &filters));
        assert!(passes_filters(&user("b", 30, 1.0, Some("Female"), &[]), &filters));
        assert!(!passes_filters(&user("c", 30, 1.0, Some("Male"), &[]), &filters));
    }

    #[test]
    fn languages_need_any_overlap() {
        let filters = FilterSettings {
            languages: vec!["French".into(), "German".into()],
            ..open_filters()
        };
        assert!(passes_filters(&user("a", 30, 1.0, None, &["English", "German"]), &filters));
        assert!(!passes_filters(&user("b", 30, 1.0, None, &["English"]), &filters));
        assert!(!passes_filters(&user("c", 30, 1.0, None, &[]), &filters));
    }

    #[test]
    fn filter_users_keeps_order() {
        let pool = vec![
            user("a", 20, 10.0, None, &["English"]),
            user("b", 40, 80.0, None, &["French"]),
            user("c", 22, 5.0, None, &["English"]),
        ];
        let filters = FilterSettings {
            age_range: (18, 30),
            distance: 50.0,
            languages: vec!["English".into()],
            ..open_filters()
        };
        let ids: Vec<_> = filter_users(&pool, &filters).into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
