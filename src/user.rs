/// Field holding the LMS-assigned remote unique id.
pub const REMOTE_ID_FIELD: &str = "idst";

/// A local representation of one LMS user.
///
/// Fields are kept in a fixed order (`userid`, `firstname`, `lastname`,
/// `email`, `reg_code`, `role`, then `idst` once assigned) so that
/// [`User::params`] can be signed and sent as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    params: Vec<(&'static str, String)>,
}

impl User {
    pub fn new(
        userid: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        reg_code: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            params: vec![
                ("userid", userid.into()),
                ("firstname", firstname.into()),
                ("lastname", lastname.into()),
                ("email", email.into()),
                ("reg_code", reg_code.into()),
                ("role", role.into()),
            ],
        }
    }

    /// Looks up a field by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn userid(&self) -> &str {
        self.get("userid").unwrap_or_default()
    }

    /// Stores the id the LMS assigned to this user, stringified.
    ///
    /// Calling it again replaces the previous id in place.
    pub fn set_remote_unique_id(&mut self, id: impl ToString) {
        let id = id.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == REMOTE_ID_FIELD) {
            Some((_, value)) => *value = id,
            None => self.params.push((REMOTE_ID_FIELD, id)),
        }
    }

    pub fn remote_unique_id(&self) -> Option<&str> {
        self.get(REMOTE_ID_FIELD)
    }

    /// All fields as ordered `(name, value)` pairs, ready to sign.
    pub fn params(&self) -> Vec<(&str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}
