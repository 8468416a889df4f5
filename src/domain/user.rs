use rand::seq::SliceRandom;
use rand::Rng;

use super::credentials::TestCredentials;

/// State of one virtual client. Only its own lifecycle and task calls touch it.
#[derive(Debug, Clone)]
pub struct SimulatedUser {
    credentials: TestCredentials,
    logged_in: bool,
    film_ids: Vec<String>,
}

impl SimulatedUser {
    pub fn new(credentials: TestCredentials) -> Self {
        Self {
            credentials,
            logged_in: false,
            film_ids: Vec::new(),
        }
    }

    pub fn credentials(&self) -> &TestCredentials {
        &self.credentials
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    pub fn film_ids(&self) -> &[String] {
        &self.film_ids
    }

    /// Replaces the known identifiers. An empty scrape leaves the previous
    /// list in place.
    pub fn remember_film_ids(&mut self, ids: Vec<String>) -> bool {
        if ids.is_empty() {
            return false;
        }
        self.film_ids = ids;
        true
    }

    pub fn random_film_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.film_ids.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user() -> SimulatedUser {
        SimulatedUser::new(TestCredentials::for_id("0badf00d"))
    }

    #[test]
    fn test_new_user_is_logged_out() {
        let user = user();
        assert!(!user.is_logged_in());
        assert!(user.film_ids().is_empty());
        assert_eq!(user.random_film_id(&mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn test_empty_scrape_keeps_previous_ids() {
        let mut user = user();
        assert!(user.remember_film_ids(vec!["1".into(), "2".into()]));
        assert!(!user.remember_film_ids(Vec::new()));
        assert_eq!(user.film_ids(), ["1", "2"]);

        assert!(user.remember_film_ids(vec!["9".into()]));
        assert_eq!(user.film_ids(), ["9"]);
    }

    #[test]
    fn test_random_film_id_is_known() {
        let mut user = user();
        user.remember_film_ids(vec!["10".into(), "20".into(), "30".into()]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let id = user.random_film_id(&mut rng).unwrap();
            assert!(user.film_ids().contains(&id));
        }
    }
}
