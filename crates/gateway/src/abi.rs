//! Bindings for the Marketplace contract.

use alloy_sol_types::sol;

sol! {
    #[sol(rpc)]
    interface Marketplace {
        #[derive(Debug)]
        event ProductCreated(uint256 id, string name, uint256 price, address owner, bool purchased);

        #[derive(Debug)]
        event ProductPurchased(uint256 id, string name, uint256 price, address owner, bool purchased);

        function productCount() external view returns (uint256);

        #[derive(Debug)]
        function products(uint256 productId)
            external
            view
            returns (uint256 id, string memory name, uint256 price, address owner, bool purchased);

        function createProduct(string memory name, uint256 price) external;

        function purchaseProduct(uint256 productId) external payable;
    }
}
