//! Solidity interfaces of the rollup contracts the harness talks to.

use alloy_sol_types::sol;

sol! {
    /// The bridge holding deposited funds and the message accumulators.
    interface IBridge {
        function allowedOutboxList(uint256 index) external view returns (address);
        function delayedMessageCount() external view returns (uint256);
        function sequencerMessageCount() external view returns (uint256);
    }

    /// The rollup core contract.
    interface IRollupCore {
        function confirmPeriodBlocks() external view returns (uint64);
    }

    /// The delayed inbox.
    interface IInbox {
        function depositEth() external payable returns (uint256);
        function calculateRetryableSubmissionFee(uint256 dataLength, uint256 baseFee)
            external
            view
            returns (uint256);
    }

    /// The token gateway router deployed on the parent chain.
    interface IL1GatewayRouter {
        function setGateways(
            address[] token,
            address[] gateway,
            uint256 maxGas,
            uint256 gasPriceBid,
            uint256 maxSubmissionCost
        ) external payable returns (uint256);
        function getGateway(address token) external view returns (address);
        function inbox() external view returns (address);
    }

    /// The token gateway router deployed on the rollup.
    interface IL2GatewayRouter {
        function setGateway(address[] l1Token, address[] gateway) external;
        function getGateway(address token) external view returns (address);
    }
}
