//! Side Effects
//!
//! Runs the requests produced by `FormState` against a backend and wraps the
//! responses as outcomes to feed back through `FormState::apply`.

use crate::api::{ApiResult, RecipeBackend};
use crate::models::{Recipe, RecipeId, RecipePayload};
use crate::store::Ticket;

/// A call to make against the recipe service
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Load { ticket: Ticket },
    Create { ticket: Ticket, payload: RecipePayload },
    Update { ticket: Ticket, id: RecipeId, payload: RecipePayload },
    Delete { ticket: Ticket, id: RecipeId },
}

impl Request {
    pub fn ticket(&self) -> Ticket {
        match self {
            Request::Load { ticket }
            | Request::Create { ticket, .. }
            | Request::Update { ticket, .. }
            | Request::Delete { ticket, .. } => *ticket,
        }
    }
}

/// The answer to a `Request`
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded {
        ticket: Ticket,
        result: ApiResult<Vec<Recipe>>,
    },
    /// Create (`target` is `None`) or update response
    Saved {
        ticket: Ticket,
        target: Option<RecipeId>,
        result: ApiResult<Recipe>,
    },
    Deleted {
        ticket: Ticket,
        id: RecipeId,
        result: ApiResult<()>,
    },
}

/// Execute one request; never fails, errors travel inside the outcome
pub async fn perform<B>(backend: &B, request: Request) -> Outcome
where
    B: RecipeBackend + ?Sized,
{
    match request {
        Request::Load { ticket } => Outcome::Loaded {
            ticket,
            result: backend.list().await,
        },
        Request::Create { ticket, payload } => Outcome::Saved {
            ticket,
            target: None,
            result: backend.create(&payload).await,
        },
        Request::Update { ticket, id, payload } => {
            let result = backend.update(&id, &payload).await;
            Outcome::Saved {
                ticket,
                target: Some(id),
                result,
            }
        }
        Request::Delete { ticket, id } => {
            let result = backend.delete(&id).await;
            Outcome::Deleted { ticket, id, result }
        }
    }
}
