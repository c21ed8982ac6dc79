//! Staged DHV token sale with three capacity pools and linear vesting.
//!
//! Contributions in ETH, USDT, DAI or NUX are converted into a DHV allocation
//! at admin-set fixed-point rates. The presale and public sale windows each
//! draw from their own pool, with NUX purchases carved out of a guaranteed
//! presale sub-pool. Proceeds pass straight through to the treasury; the
//! recorded allocations unlock linearly once vesting starts and are claimed
//! from this contract in DHV.
//! The program is ABI-equivalent with Solidity, which means you can call it
//! from both Solidity and Rust. To do this, run `cargo stylus export-abi`.

// Allow `cargo stylus export-abi` to generate a main function.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod pools;
pub mod purchase;
pub mod rates;
pub mod stage;
pub mod vesting;

use crate::pools::{pool_for, remaining, PaymentMethod, Pool};
use crate::purchase::{check_purchase, PurchaseError, SaleSnapshot};
use crate::stage::{stage_at, SaleWindows, Stage};
use alloy_sol_types::sol; // Define errors and interfaces
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    block,    // Includes block::timestamp
    call::{transfer_eth, Error as CallError},
    contract, // Own address and ETH balance
    evm,      // Events
    msg,      // Access msg::sender and msg::value
    prelude::*,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

sol_interface! {
    interface IERC20 {
        function transfer(address, uint256) external returns (bool);
        function transferFrom(address, address, uint256) external returns (bool);
        function balanceOf(address) external returns (uint256);
    }
}

// Define some persistent storage using the Solidity ABI.
// `DhvTokensale` will be the entrypoint.
sol_storage! {
    #[entrypoint]
    pub struct DhvTokensale {
        bool initialized;                       // Required before contract usage
        address owner;                          // Smart contract manager
        bool paused;                            // Blocks all purchases while set

        address dhv_token;                      // Token being sold and vested
        address usdt_token;                     // Accepted stablecoin
        address dai_token;                      // Accepted stablecoin
        address nux_token;                      // Partner token, presale only
        address treasury;                       // Sole destination for proceeds

        uint256 pre_sale_start;                 // Presale window [start, end)
        uint256 pre_sale_end;
        uint256 public_sale_start;              // Public sale window [start, end)
        uint256 public_sale_end;

        uint256 presale_pool;                   // Cap on non-NUX presale allocations
        uint256 presale_nux_pool;               // Guaranteed NUX sub-pool cap
        uint256 public_pool;                    // Cap on public sale allocations
        uint256 purchased_pre_sale;             // Running total against presale_pool
        uint256 purchased_with_nux;             // Running total against presale_nux_pool
        uint256 purchased_public_sale;          // Running total against public_pool

        uint256 precision;                      // Fixed-point scalar for rate math
        uint256 max_purchase;                   // Cumulative per-investor ceiling, 0 = unlimited
        mapping(address => uint256) rates;      // Allocation units per currency unit, address(0) = ETH

        uint256 vesting_start;                  // 0 until scheduled by the admin
        uint256 vesting_duration;               // Linear release period in seconds
        mapping(address => uint256) purchased;  // Cumulative allocation per investor
        mapping(address => uint256) claimed;    // Cumulative released allocation per investor
    }
}

// Declare events and Solidity error types
sol! {
    error AlreadyInitialized();
    error NotInitialized();
    error OnlyOwner();
    error ZeroValueArgumentInjected();
    error SalePaused();
    error NotPaused();
    error SaleStagesOver();
    error PresaleStagesOver();
    error ZeroAmount();
    error TokenNotSupported();
    error RatesNotSet();
    error AmountTooLarge();
    error MaxPurchaseExceeded();
    error NotEnoughDHVInPresalePool();
    error NotEnoughDHVInNuxPool();
    error NotEnoughDHVInSalePool();
    error ClaimNotAllowed();
    error NoTokensDue();
    error VestingAlreadyStarted();
    error WithdrawTooEarly();
    error WithdrawSaleToken();
    error TransferFailed();

    event DHVPurchased(address indexed investor, address indexed currency, uint256 amount_in, uint256 allocation, uint8 stage);
    event DHVClaimed(address indexed investor, uint256 amount);
    event RatesChanged(address indexed currency, uint256 rate);
    event TreasuryChanged(address indexed treasury);
    event VestingStartChanged(uint256 vesting_start);
    event MaxPurchaseChanged(uint256 max_purchase);
    event Paused(address account);
    event Unpaused(address account);
    event StrayWithdrawn(address indexed currency, uint256 amount);
}

/// Exporting Solidity errors defined in sol! as Rust enums
#[derive(SolidityError)]
pub enum Errors {
    AlreadyInitialized(AlreadyInitialized),
    NotInitialized(NotInitialized),
    OnlyOwner(OnlyOwner),
    ZeroValueArgumentInjected(ZeroValueArgumentInjected),
    SalePaused(SalePaused),
    NotPaused(NotPaused),
    SaleStagesOver(SaleStagesOver),
    PresaleStagesOver(PresaleStagesOver),
    ZeroAmount(ZeroAmount),
    TokenNotSupported(TokenNotSupported),
    RatesNotSet(RatesNotSet),
    AmountTooLarge(AmountTooLarge),
    MaxPurchaseExceeded(MaxPurchaseExceeded),
    NotEnoughDHVInPresalePool(NotEnoughDHVInPresalePool),
    NotEnoughDHVInNuxPool(NotEnoughDHVInNuxPool),
    NotEnoughDHVInSalePool(NotEnoughDHVInSalePool),
    ClaimNotAllowed(ClaimNotAllowed),
    NoTokensDue(NoTokensDue),
    VestingAlreadyStarted(VestingAlreadyStarted),
    WithdrawTooEarly(WithdrawTooEarly),
    WithdrawSaleToken(WithdrawSaleToken),
    TransferFailed(TransferFailed),
}

/// External methods for `DhvTokensale`
#[public]
impl DhvTokensale {
    /// Initialize the smart contract
    ///
    /// # Arguments
    ///
    /// * `usdt` - The address of the accepted USDT token
    /// * `dai` - The address of the accepted DAI token
    /// * `nux` - The address of the partner NUX token (presale only)
    /// * `dhv` - The address of the DHV token being sold
    /// * `treasury` - The address receiving all proceeds
    /// * `pre_sale_start` / `pre_sale_end` - The presale window, half open
    /// * `public_sale_start` / `public_sale_end` - The public sale window, half open
    /// * `presale_pool` / `presale_nux_pool` / `public_pool` - Pool caps in allocation units
    /// * `precision` - Fixed-point scalar dividing every rate conversion
    /// * `vesting_start` - Unlock schedule start, 0 to schedule later
    /// * `vesting_duration` - Linear unlock period in seconds
    pub fn init(
        &mut self,
        usdt: Address,
        dai: Address,
        nux: Address,
        dhv: Address,
        treasury: Address,
        pre_sale_start: U256,
        pre_sale_end: U256,
        public_sale_start: U256,
        public_sale_end: U256,
        presale_pool: U256,
        presale_nux_pool: U256,
        public_pool: U256,
        precision: U256,
        vesting_start: U256,
        vesting_duration: U256,
    ) -> Result<(), Errors> {
        // Perform required validation
        self.validate_initialization()?;
        self.validate_address(usdt)?;
        self.validate_address(dai)?;
        self.validate_address(nux)?;
        self.validate_address(dhv)?;
        self.validate_address(treasury)?;
        if precision.is_zero() {
            return Err(Errors::ZeroValueArgumentInjected(
                ZeroValueArgumentInjected {},
            ));
        }

        // Setup the smart contract by configuring storage
        self.initialized.set(true);
        self.owner.set(msg::sender());
        self.usdt_token.set(usdt);
        self.dai_token.set(dai);
        self.nux_token.set(nux);
        self.dhv_token.set(dhv);
        self.treasury.set(treasury);
        self.pre_sale_start.set(pre_sale_start);
        self.pre_sale_end.set(pre_sale_end);
        self.public_sale_start.set(public_sale_start);
        self.public_sale_end.set(public_sale_end);
        self.presale_pool.set(presale_pool);
        self.presale_nux_pool.set(presale_nux_pool);
        self.public_pool.set(public_pool);
        self.precision.set(precision);
        self.vesting_start.set(vesting_start);
        self.vesting_duration.set(vesting_duration);

        Ok(())
    }

    /// Buy DHV with the native coin; the attached value is the contribution
    /// and is forwarded in full to the treasury.
    #[payable]
    pub fn purchase_dhv_with_eth(&mut self) -> Result<(), Errors> {
        self.validate_is_initialized()?;
        self.record_purchase(Address::ZERO, Some(PaymentMethod::Eth), msg::value())?;
        transfer_eth(self.treasury.get(), msg::value())
            .map_err(|_| Errors::TransferFailed(TransferFailed {}))
    }

    /// Buy DHV with an accepted ERC20 currency. The caller must have
    /// approved this contract for `amount`; the funds are pulled directly
    /// into the treasury.
    ///
    /// # Arguments
    ///
    /// * `token` - The address of the payment currency
    /// * `amount` - The contribution in the currency's own units
    pub fn purchase_dhv_with_erc20(&mut self, token: Address, amount: U256) -> Result<(), Errors> {
        self.validate_is_initialized()?;
        let method = self.erc20_method(token);
        self.record_purchase(token, method, amount)?;

        let payer = msg::sender();
        let treasury = self.treasury.get();
        Self::require_transfer(IERC20::new(token).transfer_from(self, payer, treasury, amount))
    }

    /// Buy DHV with the partner NUX token, drawing on the guaranteed presale
    /// sub-pool. Only available while the presale window is open.
    ///
    /// # Arguments
    ///
    /// * `amount` - The contribution in NUX units
    pub fn purchase_dhv_with_nux(&mut self, amount: U256) -> Result<(), Errors> {
        self.validate_is_initialized()?;
        let nux = self.nux_token.get();
        self.record_purchase(nux, Some(PaymentMethod::Nux), amount)?;

        let payer = msg::sender();
        let treasury = self.treasury.get();
        Self::require_transfer(IERC20::new(nux).transfer_from(self, payer, treasury, amount))
    }

    /// Release every allocation unit that has vested since the caller's last
    /// claim. Rejected outright before the vesting start and when nothing is
    /// due, so an accidental double claim surfaces instead of silently
    /// transferring zero.
    pub fn claim(&mut self) -> Result<(), Errors> {
        self.validate_is_initialized()?;

        let start = self.vesting_start.get();
        let now = U256::from(block::timestamp());
        if start.is_zero() || now < start {
            return Err(Errors::ClaimNotAllowed(ClaimNotAllowed {}));
        }

        let investor = msg::sender();
        let total = self.purchased.get(investor);
        let already_claimed = self.claimed.get(investor);
        let due = vesting::claimable(
            total,
            already_claimed,
            now,
            start,
            self.vesting_duration.get(),
        );
        if due.is_zero() {
            return Err(Errors::NoTokensDue(NoTokensDue {}));
        }

        // Record the release before the untrusted token call
        self.claimed.setter(investor).set(already_claimed + due);

        evm::log(DHVClaimed {
            investor,
            amount: due,
        });

        Self::require_transfer(IERC20::new(self.dhv_token.get()).transfer(self, investor, due))
    }

    /// The current sale stage: 0 not started, 1 presale, 2 public sale, 3 closed
    pub fn current_stage(&self) -> u8 {
        self.stage_now().as_u8()
    }

    /// Allocation units granted per unit of `currency`, scaled by the
    /// precision; zero means the currency is not configured for purchase
    pub fn rate_for(&self, currency: Address) -> U256 {
        self.rates.get(currency)
    }

    /// Preview the allocation a contribution would produce at current
    /// rates; zero when the currency is unconfigured or the product would
    /// not fit in 256 bits
    pub fn quote(&self, currency: Address, amount_in: U256) -> U256 {
        rates::convert(amount_in, self.rates.get(currency), self.precision.get())
            .unwrap_or(U256::ZERO)
    }

    /// Remaining capacity a purchase in `stage` paid with `currency` could
    /// draw on; zero whenever no pool applies
    pub fn available_in(&self, stage: u8, currency: Address) -> U256 {
        let stage = match Stage::from_u8(stage) {
            Some(stage) => stage,
            None => return U256::ZERO,
        };
        let method = match self.payment_method(currency) {
            Some(method) => method,
            None => return U256::ZERO,
        };
        match pool_for(stage, method) {
            Some(pool) => self.pool_remaining(pool),
            None => U256::ZERO,
        }
    }

    /// Cumulative allocation units ever granted to `investor`
    pub fn total_purchased(&self, investor: Address) -> U256 {
        self.purchased.get(investor)
    }

    /// Cumulative allocation units already released to `investor`
    pub fn claimed(&self, investor: Address) -> U256 {
        self.claimed.get(investor)
    }

    /// Allocation units `investor` could claim right now
    pub fn claimable(&self, investor: Address) -> U256 {
        let start = self.vesting_start.get();
        if start.is_zero() {
            return U256::ZERO;
        }
        vesting::claimable(
            self.purchased.get(investor),
            self.claimed.get(investor),
            U256::from(block::timestamp()),
            start,
            self.vesting_duration.get(),
        )
    }

    pub fn treasury(&self) -> Address {
        self.treasury.get()
    }

    pub fn dhv_token(&self) -> Address {
        self.dhv_token.get()
    }

    pub fn usdt_token(&self) -> Address {
        self.usdt_token.get()
    }

    pub fn dai_token(&self) -> Address {
        self.dai_token.get()
    }

    pub fn nux_token(&self) -> Address {
        self.nux_token.get()
    }

    pub fn paused(&self) -> bool {
        self.paused.get()
    }

    pub fn precision(&self) -> U256 {
        self.precision.get()
    }

    pub fn max_purchase(&self) -> U256 {
        self.max_purchase.get()
    }

    pub fn vesting_start(&self) -> U256 {
        self.vesting_start.get()
    }

    pub fn vesting_duration(&self) -> U256 {
        self.vesting_duration.get()
    }

    pub fn presale_pool(&self) -> U256 {
        self.presale_pool.get()
    }

    pub fn presale_nux_pool(&self) -> U256 {
        self.presale_nux_pool.get()
    }

    pub fn public_pool(&self) -> U256 {
        self.public_pool.get()
    }

    pub fn purchased_pre_sale(&self) -> U256 {
        self.purchased_pre_sale.get()
    }

    pub fn purchased_with_nux(&self) -> U256 {
        self.purchased_with_nux.get()
    }

    pub fn purchased_public_sale(&self) -> U256 {
        self.purchased_public_sale.get()
    }

    /// Set the conversion rate for a currency, address(0) for ETH. A zero
    /// rate disables purchases in that currency. Takes effect immediately.
    pub fn admin_set_rates(&mut self, currency: Address, rate: U256) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        self.rates.setter(currency).set(rate);
        evm::log(RatesChanged { currency, rate });
        Ok(())
    }

    /// Point future proceeds at a new treasury address
    pub fn admin_set_treasury(&mut self, treasury: Address) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        self.validate_address(treasury)?;
        self.treasury.set(treasury);
        evm::log(TreasuryChanged { treasury });
        Ok(())
    }

    /// Schedule or move the vesting start. Frozen the moment the currently
    /// scheduled start is reached, so accrual can never be rewritten after
    /// the fact.
    pub fn admin_set_vesting_start(&mut self, vesting_start: U256) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        let current = self.vesting_start.get();
        if !current.is_zero() && U256::from(block::timestamp()) >= current {
            return Err(Errors::VestingAlreadyStarted(VestingAlreadyStarted {}));
        }
        self.vesting_start.set(vesting_start);
        evm::log(VestingStartChanged { vesting_start });
        Ok(())
    }

    /// Set the cumulative per-investor allocation ceiling, 0 for unlimited
    pub fn admin_set_max_purchase(&mut self, max_purchase: U256) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        self.max_purchase.set(max_purchase);
        evm::log(MaxPurchaseChanged { max_purchase });
        Ok(())
    }

    /// Halt all purchases until `admin_unpause`
    pub fn admin_pause(&mut self) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        if self.paused.get() {
            return Err(Errors::SalePaused(SalePaused {}));
        }
        self.paused.set(true);
        evm::log(Paused {
            account: msg::sender(),
        });
        Ok(())
    }

    /// Resume purchases
    pub fn admin_unpause(&mut self) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        if !self.paused.get() {
            return Err(Errors::NotPaused(NotPaused {}));
        }
        self.paused.set(false);
        evm::log(Unpaused {
            account: msg::sender(),
        });
        Ok(())
    }

    /// Sweep stray ETH sitting on the contract to the treasury. Purchases
    /// forward their value immediately, so anything here arrived out of
    /// band. Only permitted once every sale window has closed.
    pub fn admin_withdraw(&mut self) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        self.validate_sale_over()?;

        let amount = contract::balance();
        evm::log(StrayWithdrawn {
            currency: Address::ZERO,
            amount,
        });
        transfer_eth(self.treasury.get(), amount)
            .map_err(|_| Errors::TransferFailed(TransferFailed {}))
    }

    /// Sweep a stray ERC20 balance to the treasury once every sale window
    /// has closed. The DHV token itself is refused because its balance backs
    /// unclaimed vesting obligations.
    pub fn admin_withdraw_erc20(&mut self, token: Address) -> Result<(), Errors> {
        self.validate_sender_is_owner()?;
        self.validate_sale_over()?;
        if token == self.dhv_token.get() {
            return Err(Errors::WithdrawSaleToken(WithdrawSaleToken {}));
        }

        let amount = match IERC20::new(token).balance_of(&mut *self, contract::address()) {
            Ok(amount) => amount,
            Err(_) => return Err(Errors::TransferFailed(TransferFailed {})),
        };
        let treasury = self.treasury.get();
        evm::log(StrayWithdrawn {
            currency: token,
            amount,
        });
        Self::require_transfer(IERC20::new(token).transfer(self, treasury, amount))
    }
}

// Internal methods for `DhvTokensale`
impl DhvTokensale {
    /// Function ensuring we are initialized
    pub fn validate_is_initialized(&self) -> Result<(), Errors> {
        if !self.initialized.get() {
            return Err(Errors::NotInitialized(NotInitialized {}));
        }

        Ok(())
    }

    /// Function ensuring we are not already initialized
    pub fn validate_initialization(&self) -> Result<(), Errors> {
        if self.initialized.get() {
            return Err(Errors::AlreadyInitialized(AlreadyInitialized {}));
        }

        Ok(())
    }

    /// Function ensuring sender is owner of the smart contract (simple ownership)
    pub fn validate_sender_is_owner(&self) -> Result<(), Errors> {
        if msg::sender() != self.owner.get() {
            return Err(Errors::OnlyOwner(OnlyOwner {}));
        }

        Ok(())
    }

    /// Function ensuring that a zero value is not supplied for an address
    pub fn validate_address(&self, value: Address) -> Result<(), Errors> {
        if value == Address::default() {
            return Err(Errors::ZeroValueArgumentInjected(
                ZeroValueArgumentInjected {},
            ));
        }

        Ok(())
    }

    /// Function ensuring every sale window has closed, which gates the
    /// stray-asset sweeps so funds cannot be drained mid-sale
    pub fn validate_sale_over(&self) -> Result<(), Errors> {
        let now = U256::from(block::timestamp());
        if now < self.pre_sale_end.get() || now < self.public_sale_end.get() {
            return Err(Errors::WithdrawTooEarly(WithdrawTooEarly {}));
        }

        Ok(())
    }

    /// Tag for a configured ERC20 currency, or None if unsupported
    pub fn erc20_method(&self, token: Address) -> Option<PaymentMethod> {
        if token == self.usdt_token.get() {
            Some(PaymentMethod::Usdt)
        } else if token == self.dai_token.get() {
            Some(PaymentMethod::Dai)
        } else if token == self.nux_token.get() {
            Some(PaymentMethod::Nux)
        } else {
            None
        }
    }

    /// Tag for any accepted currency, with address(0) as the ETH sentinel
    pub fn payment_method(&self, currency: Address) -> Option<PaymentMethod> {
        if currency == Address::ZERO {
            return Some(PaymentMethod::Eth);
        }
        self.erc20_method(currency)
    }

    pub fn windows(&self) -> SaleWindows {
        SaleWindows {
            pre_sale_start: self.pre_sale_start.get(),
            pre_sale_end: self.pre_sale_end.get(),
            public_sale_start: self.public_sale_start.get(),
            public_sale_end: self.public_sale_end.get(),
        }
    }

    pub fn stage_now(&self) -> Stage {
        stage_at(U256::from(block::timestamp()), &self.windows())
    }

    /// Remaining capacity of one of the three pools
    pub fn pool_remaining(&self, pool: Pool) -> U256 {
        match pool {
            Pool::PreSale => remaining(self.presale_pool.get(), self.purchased_pre_sale.get()),
            Pool::PreSaleNux => {
                remaining(self.presale_nux_pool.get(), self.purchased_with_nux.get())
            }
            Pool::PublicSale => remaining(self.public_pool.get(), self.purchased_public_sale.get()),
        }
    }

    fn debit_pool(&mut self, pool: Pool, allocation: U256) {
        match pool {
            Pool::PreSale => {
                let used = self.purchased_pre_sale.get();
                self.purchased_pre_sale.set(used + allocation);
            }
            Pool::PreSaleNux => {
                let used = self.purchased_with_nux.get();
                self.purchased_with_nux.set(used + allocation);
            }
            Pool::PublicSale => {
                let used = self.purchased_public_sale.get();
                self.purchased_public_sale.set(used + allocation);
            }
        }
    }

    fn pool_exhausted_error(pool: Pool) -> Errors {
        match pool {
            Pool::PreSale => Errors::NotEnoughDHVInPresalePool(NotEnoughDHVInPresalePool {}),
            Pool::PreSaleNux => Errors::NotEnoughDHVInNuxPool(NotEnoughDHVInNuxPool {}),
            Pool::PublicSale => Errors::NotEnoughDHVInSalePool(NotEnoughDHVInSalePool {}),
        }
    }

    /// Shared purchase path behind the three entry points. Snapshots the
    /// sale state, runs the fixed check order through `check_purchase`, and
    /// lands every ledger write before the caller performs the untrusted
    /// funds transfer. A failed transfer reverts the whole call, ledger
    /// writes included.
    ///
    /// # Arguments
    ///
    /// * `currency` - The rate-table key, address(0) for ETH
    /// * `method` - The tagged payment method, or None if the entry point
    ///   could not classify the currency
    /// * `amount_in` - The contribution in the currency's own units
    pub fn record_purchase(
        &mut self,
        currency: Address,
        method: Option<PaymentMethod>,
        amount_in: U256,
    ) -> Result<U256, Errors> {
        let snapshot = SaleSnapshot {
            paused: self.paused.get(),
            stage: self.stage_now(),
            precision: self.precision.get(),
            max_purchase: self.max_purchase.get(),
            presale_remaining: self.pool_remaining(Pool::PreSale),
            nux_remaining: self.pool_remaining(Pool::PreSaleNux),
            public_remaining: self.pool_remaining(Pool::PublicSale),
        };
        let investor = msg::sender();
        let total = self.purchased.get(investor);
        let rate = self.rates.get(currency);

        let (allocation, pool) = check_purchase(&snapshot, method, rate, amount_in, total)
            .map_err(Self::purchase_error)?;

        self.debit_pool(pool, allocation);
        self.purchased.setter(investor).set(total + allocation);

        evm::log(DHVPurchased {
            investor,
            currency,
            amount_in,
            allocation,
            stage: snapshot.stage.as_u8(),
        });

        Ok(allocation)
    }

    fn purchase_error(reason: PurchaseError) -> Errors {
        match reason {
            PurchaseError::SalePaused => Errors::SalePaused(SalePaused {}),
            PurchaseError::PresaleStagesOver => Errors::PresaleStagesOver(PresaleStagesOver {}),
            PurchaseError::SaleStagesOver => Errors::SaleStagesOver(SaleStagesOver {}),
            PurchaseError::ZeroAmount => Errors::ZeroAmount(ZeroAmount {}),
            PurchaseError::TokenNotSupported => Errors::TokenNotSupported(TokenNotSupported {}),
            PurchaseError::RatesNotSet => Errors::RatesNotSet(RatesNotSet {}),
            PurchaseError::AmountTooLarge => Errors::AmountTooLarge(AmountTooLarge {}),
            PurchaseError::MaxPurchaseExceeded => {
                Errors::MaxPurchaseExceeded(MaxPurchaseExceeded {})
            }
            PurchaseError::PoolExhausted(pool) => Self::pool_exhausted_error(pool),
        }
    }

    /// Collapse an ERC20 call result into success or a `TransferFailed` revert
    pub fn require_transfer(result: Result<bool, CallError>) -> Result<(), Errors> {
        match result {
            Ok(true) => Ok(()),
            _ => Err(Errors::TransferFailed(TransferFailed {})),
        }
    }
}
