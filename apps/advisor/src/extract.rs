use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` body extractor whose rejections use the `AppError` envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
