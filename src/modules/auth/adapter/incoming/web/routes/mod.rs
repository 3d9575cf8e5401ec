mod login;
mod logout;
mod refresh;
mod session;

pub use login::*;
pub use logout::*;
pub use refresh::*;
pub use session::*;
