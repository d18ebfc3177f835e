alloy::sol! {
    #[sol(rpc)]
    interface IDionysToken {
        function approve(address spender, uint256 value) returns (bool);
        function transfer(address to, uint256 value) returns (bool);
        function balanceOf(address owner) view returns (uint256);
        function burn(uint256 amount);
        function claimFaucet();

        event FaucetClaimed(address indexed claimer, uint256 amount);
        event Transfer(address indexed from, address indexed to, uint256 value);
    }

    #[sol(rpc)]
    interface INative {
        function depositNative() payable;
        function withdrawNative(uint256 amount);
        function getContractBalance() view returns (uint256);
        function claimFaucet();
        function donate() payable;

        event DonationReceived(address indexed donor, uint256 amount);
    }

    #[sol(rpc)]
    interface IStaking {
        function stake(uint256 amount);
        function unstake(uint256 amount);
        function claimRewards();
        function addRewardTokens(uint256 amount);
        function setRewardPerSecond(uint256 rate);
        function stakedAmounts(address user) view returns (uint256);
    }

    #[sol(rpc)]
    interface ILottery {
        function spinWheel();
        function burnNft(uint256 tokenId);
        function withdrawTokens();
        function addRewardTokens(uint256 amount);
        function getLeaderboard() view returns (address[] memory users, uint256[] memory points);

        event SpinWheel(address indexed user, string rarity, uint256 points, string cid);
    }

    #[sol(rpc)]
    interface INftCollection {
        function setLotteryContract(address lottery);
        function getNFTDetails(uint256 tokenId) view returns (string memory rarity, uint256 points, string memory cid);
    }

    #[sol(rpc)]
    interface IQuiz {
        function joinQuiz();
        function submitAnswer(bool correct);
        function claimRewards();
        function addRewardTokens(uint256 amount);
    }

    #[sol(rpc)]
    interface INameService {
        function registerName(string name) payable;
        function getName(address owner) view returns (string memory);
        function getOwner(string name) view returns (address);
        function getNamesByOwner(address owner) view returns (string[] memory);
        function withdrawFunds();
    }

    // Mirrors the on-chain `users` mapping value type.
    struct ReferralUser {
        address referrer;
        uint256 totalReferrals;
        uint256 totalRewards;
        bool exists;
    }

    #[sol(rpc)]
    interface IReferral {
        function register(address referrer);
        function addRewardTokens(uint256 amount);
        function getLeaderboard() view returns (address[] memory users, uint256[] memory counts);
        function getReferralDetails(address user) view returns (uint256 totalReferrals, uint256 totalRewards);
        function users(address user) view returns (ReferralUser memory);
    }

    #[sol(rpc)]
    interface ITokenFactory {
        function fee() view returns (uint256);
        function owner() view returns (address);
        function updateFee(uint256 amount);
        function createToken(string name, string symbol, uint256 totalSupply) payable;
        function withdrawFees();

        event TokenCreated(address indexed tokenAddress, string name, string symbol, uint256 totalSupply);
    }

    struct Activity {
        string activity;
        string description;
        uint256 amount;
        string txhash;
    }

    #[sol(rpc)]
    interface ILeaderboard {
        function addActivity(address user, string activity, string description, uint256 amount, string txhash);
        function getUsers() view returns (address[] memory);
        function getActivities(address user) view returns (Activity[] memory);
    }
}
