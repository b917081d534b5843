// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! The request page
//!
//! Form capture, response rendering, the response panel state machine
//! and the HTML view, tied together by [`Page`].

pub mod form;
mod page;
mod render;
mod state;
pub mod view;

pub use form::{FormData, RequestInput};
pub use page::{Page, Submission};
pub use render::{render, RESPONSE_LANG};
pub use state::{Failure, ResponseState};
