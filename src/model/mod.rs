/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Login response and session models
pub mod auth;
/// Request models for API calls
pub mod requests;
/// Per-application outcomes and the run report
pub mod responses;
