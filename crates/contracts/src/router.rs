//! Uniswap V2 router interface definitions.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::prepared_call::PreparedCall;

sol! {
    #[sol(rpc)]
    interface IUniswapV2Router {
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] path,
            address to,
            uint256 deadline
        ) external returns (uint256[] amounts);
    }
}

crate::define_contract_client!(
    /// Client for a Uniswap V2 style router.
    RouterClient
);

impl RouterClient {
    /// Create a prepared `swapExactTokensForTokens(...)` sent by `from`.
    ///
    /// `path[0]` is the token spent, the last element the token received.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        from: Address,
        amount_in: U256,
        amount_out_min: U256,
        path: Vec<Address>,
        to: Address,
        deadline: U256,
    ) -> PreparedCall<'_, IUniswapV2Router::swapExactTokensForTokensCall> {
        let call = IUniswapV2Router::swapExactTokensForTokensCall {
            amountIn: amount_in,
            amountOutMin: amount_out_min,
            path,
            to,
            deadline,
        };
        PreparedCall::new(from, self.address, call, &self.provider)
    }
}
