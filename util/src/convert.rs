use anyhow::Error;
use primitives::Address;
use system::errors::ClientError;

/// Parses a 20 byte hex address, with or without the `0x` prefix
pub fn parse_address(value: &str) -> Result<Address, Error> {
	let trimmed = value.trim();
	let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
	let bytes = hex::decode(hex_str)
		.map_err(|_| ClientError::InvalidAddress(format!("Can't create address from string {value}")))?;
	if bytes.len() != 20 {
		return Err(ClientError::InvalidAddress(format!("Invalid address {value}, length <> 20 bytes")).into())
	}
	Ok(Address::from_slice(&bytes))
}

pub fn format_address(address: &Address) -> String {
	format!("0x{}", hex::encode(address.as_bytes()))
}
