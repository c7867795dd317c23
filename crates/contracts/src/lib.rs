//! Wire types shared between the PDF Q&A frontend and its backend API

pub mod usecases;
