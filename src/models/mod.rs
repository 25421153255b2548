pub mod bs;
pub mod normal;

/// Common traits used by all pricers
pub mod traits {
    use crate::error::PricingResult;
    use crate::pricing::types::{ContractParams, OptionType};

    /// Prices one leg of a contract
    pub trait OptionPricer {
        fn option_type(&self) -> OptionType;
        fn price(&self, contract: &ContractParams) -> PricingResult<f64>;
    }
}

/// Utility functions for option pricing
pub mod utils {
    use crate::error::PricingResult;
    use crate::models::bs::{bs_call_price, bs_put_price, EuropeanCall, EuropeanPut};
    use crate::models::traits::OptionPricer;
    use crate::pricing::types::{ContractParams, DegeneratePolicy, OptionType, PricePair};

    /// Price a single leg
    pub fn price_option(
        option_type: OptionType,
        contract: &ContractParams,
        policy: DegeneratePolicy,
    ) -> PricingResult<f64> {
        match option_type {
            OptionType::Call => bs_call_price(contract, policy),
            OptionType::Put => bs_put_price(contract, policy),
        }
    }

    /// Price both legs, failing if either leg fails
    pub fn price_both(
        contract: &ContractParams,
        policy: DegeneratePolicy,
    ) -> PricingResult<PricePair> {
        Ok(PricePair {
            call: EuropeanCall { policy }.price(contract)?,
            put: EuropeanPut { policy }.price(contract)?,
        })
    }
}
