#[cfg(test)]
mod tests {
	use crate::wallet::{request_accounts_from, to_rpc_error, WalletPoll};
	use anyhow::Error;
	use ethers::providers::{JsonRpcError, MockResponse, Provider};
	use primitives::*;
	use system::errors::ProviderRpcError;
	use traits::wallet_provider::ProviderEvent;

	fn rpc_error(code: i64, message: &str) -> MockResponse {
		MockResponse::Error(JsonRpcError { code, message: message.to_string(), data: None })
	}

	#[tokio::test]
	async fn test_user_rejection_keeps_code_and_message() {
		let (client, mock) = Provider::mocked();
		mock.push_response(rpc_error(4001, "User rejected the request."));

		let e = request_accounts_from(&client).await.err();
		assert_eq!(e, Some(ProviderRpcError::new(4001, "User rejected the request.")));
		assert!(e.map_or(false, |e| e.is_user_rejection()));
	}

	#[tokio::test]
	async fn test_pending_request_is_not_retried() {
		let (client, mock) = Provider::mocked();
		mock.push_response(rpc_error(-32002, "Already processing eth_requestAccounts"));

		let e = request_accounts_from(&client).await.err();
		assert!(e.map_or(false, |e| e.is_request_pending()));
	}

	#[tokio::test]
	async fn test_method_not_found_falls_back_to_eth_accounts() -> Result<(), Error> {
		let accounts = vec![Address::from_low_u64_be(1), Address::from_low_u64_be(2)];
		let (client, mock) = Provider::mocked();
		// answered last pushed first
		mock.push::<Vec<Address>, _>(accounts.clone())?;
		mock.push_response(rpc_error(-32601, "the method eth_requestAccounts does not exist"));

		assert_eq!(request_accounts_from(&client).await, Ok(accounts));
		Ok(())
	}

	#[tokio::test]
	async fn test_failure_without_error_response_is_internal() {
		let (client, _mock) = Provider::mocked();

		let e = client.request::<_, Vec<Address>>("eth_accounts", ()).await.err();
		let mapped = e.map(to_rpc_error);
		assert_eq!(mapped.map(|e| e.code), Some(-32603));
	}

	#[test]
	fn test_poll_disconnects_once_until_reachable() {
		let first = Address::from_low_u64_be(1);
		let mut poll = WalletPoll::new(5, vec![first]);
		let down = ProviderRpcError::new(-32603, "connection closed");

		assert!(poll.accounts_polled(Ok(vec![first])).is_empty());
		assert_eq!(poll.accounts_polled(Err(down.clone())), vec![ProviderEvent::Disconnect(down.clone())]);
		assert!(poll.accounts_polled(Err(down.clone())).is_empty());
		assert!(poll.accounts_polled(Err(down)).is_empty());
		assert!(!poll.connected());

		let second = Address::from_low_u64_be(2);
		assert_eq!(
			poll.accounts_polled(Ok(vec![second])),
			vec![ProviderEvent::Connect { chain_id: 5 }, ProviderEvent::AccountsChanged(vec![second])]
		);
		assert!(poll.connected());
		assert!(poll.accounts_polled(Ok(vec![second])).is_empty());
	}

	#[test]
	fn test_poll_reports_chain_changes() {
		let mut poll = WalletPoll::new(5, vec![]);
		assert_eq!(poll.chain_polled(5), None);
		assert_eq!(poll.chain_polled(137), Some(ProviderEvent::ChainChanged(137)));
		assert_eq!(poll.chain_polled(137), None);
	}
}
