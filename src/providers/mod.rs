pub mod bank_of_canada;
pub mod caching;

pub use bank_of_canada::BankOfCanadaProvider;
pub use caching::CachingRateProvider;
