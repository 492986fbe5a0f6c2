mod countries;
mod document;
mod filters;
mod length;
mod page;
mod results;
mod snippets;
mod validation;

pub use countries::*;
pub use document::*;
pub use filters::*;
pub use length::*;
pub use page::*;
pub use results::*;
pub use snippets::*;
pub use validation::*;
