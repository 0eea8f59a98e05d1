//! Policy-side analysis: impact projection, implementation complexity,
//! stakeholder mapping and tiered recommendations.

pub mod complexity;
pub mod impact;
pub mod recommendation;
pub mod stakeholders;
