//! ERC20 interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}

crate::define_contract_client!(
    /// Client for an external ERC-20 token.
    TokenClient
);

impl crate::client::Erc20Client for TokenClient {}

crate::impl_erc20_transactions!(TokenClient);
