//! Contract bindings for the calls the exchange reader makes.

use alloy::sol;

sol! {
    /// Minimal ERC-20 surface: only the decimals used for unit conversion.
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
    }

    #[sol(rpc)]
    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
        /// Both reserves and the timestamp of the last reserve update.
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }

    /// Registry from token pairs to pair contracts. Returns the zero address
    /// when no pair exists.
    #[sol(rpc)]
    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }
}
