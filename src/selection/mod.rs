// Roster construction: the constrained selector and the feasibility
// validator it hands rosters to.

pub mod selector;
pub mod validator;
