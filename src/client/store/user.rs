use crate::model::user::UserDto;

/// Signed-in user shared through context as `Signal<UserState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether the initial `/api/auth/user` request has completed.
    pub fetched: bool,
}
