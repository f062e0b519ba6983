//! Contract ABI definitions for the test token templates
//!
//! Both templates are OpenZeppelin-style ERC20 tokens with `Ownable`.
//! `DetailedTestToken` takes name, symbol and initial supply in its
//! constructor and adds `mint`/`burn`; `FastTestToken` has a fixed name
//! and supply baked into the bytecode.

use alloy::sol;

sol! {
    /// Union ABI of the templates, used to bind deployed instances
    #[sol(rpc)]
    interface ITestToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function owner() external view returns (address);

        function transfer(address recipient, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);

        /// Only present on DetailedTestToken
        function mint(address _to, uint256 _amount) external;
        /// Only present on DetailedTestToken
        function burn(address _from, uint256 _amount) external;

        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }

    /// constructor(string _name, string _symbol, uint256 _amount)
    #[sol(rpc, bytecode = "6080604052348015620000125760006000fd5b506040516200242d3803806200242d83398181016040526060811015620000395760006000fd5b81019080805160405193929190846401000000008211156200005b5760006000fd5b83820191506020820185811115620000735760006000fd5b8251866001820283011164010000000082111715620000925760006000fd5b8083526020830192505050908051906020019080838360005b83811015620000c95780820151818401525b602081019050620000ab565b50505050905090810190601f168015620000f75780820380516001836020036101000a031916815260200191505b50604052602001805160405193929190846401000000008211156200011c5760006000fd5b83820191506020820185811115620001345760006000fd5b8251866001820283011164010000000082111715620001535760006000fd5b8083526020830192505050908051906020019080838360005b838110156200018a5780820151818401525b6020810190506200016c565b50505050905090810190601f168015620001b85780820380516001836020036101000a031916815260200191505b50604052602001805190602001909291905050505b5b82825b5b5b8160036000509080519060200190620001ee9291906200059e565b5080600460005090805190602001906200020a9291906200059e565b506012600560006101000a81548160ff021916908360ff1602179055505b505060006200023c620002f860201b60201c565b905080600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055508073ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a3505b620002ee33826200030660201b60201c565b5b50505062000650565b600033905062000303565b90565b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff1614151515620003af576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601f8152602001807f45524332303a206d696e7420746f20746865207a65726f20616464726573730081526020015060200191505060405180910390fd5b620003c3600083836200050260201b60201c565b620003e2816002600050546200050860201b620011a21790919060201c565b60026000508190909055506200044c81600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546200050860201b620011a21790919060201c565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b5050565b5b505050565b6000600082840190508381101515156200058d576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601b8152602001807f536166654d6174683a206164646974696f6e206f766572666c6f77000000000081526020015060200191505060405180910390fd5b809150506200059856505b92915050565b828054600181600116156101000203166002900490600052602060002090601f016020900481019282601f10620005e157805160ff191683800117855562000617565b8280016001018555821562000617579182015b82811115620006165782518260005090905591602001919060010190620005f4565b5b5090506200062691906200062a565b5090565b62000630565b808211156200064c576000818150600090555060010162000630565b5090565b611dcd80620006606000396000f3fe60806040523480156100115760006000fd5b50600436106101055760003560e01c8063715018a611610098578063a457c2d711610067578063a457c2d7146104d6578063a9059cbb1461053b578063dd62ed3e146105a0578063f2fde38b1461061957610105565b8063715018a6146103c55780638da5cb5b146103cf57806395d89b41146104035780639dc29fac1461048757610105565b8063313ce567116100d4578063313ce5671461029757806339509351146102b857806340c10f191461031d57806370a082311461036c57610105565b806306fdde031461010b578063095ea7b31461018f57806318160ddd146101f457806323b872dd1461021257610105565b60006000fd5b61011361065e565b6040518080602001828103825283818151815260200191508051906020019080838360005b838110156101545780820151818401525b602081019050610138565b50505050905090810190601f1680156101815780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6101dc600480360360408110156101a65760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610708565b60405180821515815260200191505060405180910390f35b6101fc610737565b6040518082815260200191505060405180910390f35b61027f600480360360608110156102295760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610749565b60405180821515815260200191505060405180910390f35b61029f610848565b604051808260ff16815260200191505060405180910390f35b610305600480360360408110156102cf5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610864565b60405180821515815260200191505060405180910390f35b61036a600480360360408110156103345760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610937565b005b6103af600480360360208110156103835760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610a22565b6040518082815260200191505060405180910390f35b6103cd610a76565b005b6103d7610c0e565b604051808273ffffffffffffffffffffffffffffffffffffffff16815260200191505060405180910390f35b61040b610c3d565b6040518080602001828103825283818151815260200191508051906020019080838360005b8381101561044c5780820151818401525b602081019050610430565b50505050905090810190601f1680156104795780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6104d46004803603604081101561049e5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610ce7565b005b610523600480360360408110156104ed5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610dd2565b60405180821515815260200191505060405180910390f35b610588600480360360408110156105525760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610ebf565b60405180821515815260200191505060405180910390f35b610603600480360360408110156105b75760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610eee565b6040518082815260200191505060405180910390f35b61065c600480360360208110156106305760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610f83565b005b606060036000508054600181600116156101000203166002900480601f0160208091040260200160405190810160405280929190818152602001828054600181600116156101000203166002900480156106f95780601f106106ce576101008083540402835291602001916106f9565b820191906000526020600020905b8154815290600101906020018083116106dc57829003601f168201915b50505050509050610705565b90565b600061072861071b61123663ffffffff16565b848461124363ffffffff16565b60019050610731565b92915050565b60006002600050549050610746565b90565b600061075c84848461144a63ffffffff16565b6108388461076e61123663ffffffff16565b61082d85604051806060016040528060288152602001611ce160289139600160005060008b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060006107e061123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546117369092919063ffffffff16565b61124363ffffffff16565b60019050610841565b9392505050565b6000600560009054906101000a900460ff169050610861565b90565b600061092861087761123663ffffffff16565b8461091d856001600050600061089161123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008973ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546111a290919063ffffffff16565b61124363ffffffff16565b60019050610931565b92915050565b61094561123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16141515610a0c576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b610a1c82826117ff63ffffffff16565b5b5b5050565b6000600060005060008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050549050610a71565b919050565b610a8461123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16141515610b4b576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a36000600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505b5b565b6000600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff169050610c3a565b90565b606060046000508054600181600116156101000203166002900480601f016020809104026020016040519081016040528092919081815260200182805460018160011615610100020316600290048015610cd85780601f10610cad57610100808354040283529160200191610cd8565b820191906000526020600020905b815481529060010190602001808311610cbb57829003601f168201915b50505050509050610ce4565b90565b610cf561123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16141515610dbc576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b610dcc82826119ea63ffffffff16565b5b5b5050565b6000610eb0610de561123663ffffffff16565b84610ea585604051806060016040528060258152602001611d736025913960016000506000610e1861123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008a73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546117369092919063ffffffff16565b61124363ffffffff16565b60019050610eb9565b92915050565b6000610edf610ed261123663ffffffff16565b848461144a63ffffffff16565b60019050610ee8565b92915050565b6000600160005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050549050610f7d565b92915050565b610f9161123663ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16141515611058576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff16141515156110e0576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526026815260200180611c736026913960400191505060405180910390fd5b8073ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a380600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505b5b50565b600060008284019050838110151515611226576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601b8152602001807f536166654d6174683a206164646974696f6e206f766572666c6f77000000000081526020015060200191505060405180910390fd5b8091505061123056505b92915050565b6000339050611240565b90565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff16141515156112cb576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526024815260200180611d4f6024913960400191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff1614151515611353576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526022815260200180611c996022913960400191505060405180910390fd5b80600160005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff167f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925836040518082815260200191505060405180910390a35b505050565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff16141515156114d2576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526025815260200180611d2a6025913960400191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff161415151561155a576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526023815260200180611c2e6023913960400191505060405180910390fd5b61156b838383611bcf63ffffffff16565b6115dd81604051806060016040528060268152602001611cbb60269139600060005060008773ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546117369092919063ffffffff16565b600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005081909090555061168081600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546111a290919063ffffffff16565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b505050565b600083831115829015156117e6576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825283818151815260200191508051906020019080838360005b838110156117ab5780820151818401525b60208101905061178f565b50505050905090810190601f1680156117d85780820380516001836020036101000a031916815260200191505b509250505060405180910390fd5b5060008385039050809150506117f856505b9392505050565b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff16141515156118a7576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601f8152602001807f45524332303a206d696e7420746f20746865207a65726f20616464726573730081526020015060200191505060405180910390fd5b6118b960008383611bcf63ffffffff16565b6118d1816002600050546111a290919063ffffffff16565b600260005081909090555061193481600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546111a290919063ffffffff16565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b5050565b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff1614151515611a72576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401808060200182810382526021815260200180611d096021913960400191505060405180910390fd5b611a8482600083611bcf63ffffffff16565b611af681604051806060016040528060228152602001611c5160229139600060005060008673ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546117369092919063ffffffff16565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050819090905550611b5981600260005054611bd590919063ffffffff16565b6002600050819090905550600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b5050565b5b505050565b6000611c2083836040518060400160405280601e81526020017f536166654d6174683a207375627472616374696f6e206f766572666c6f77000081526020015061173663ffffffff16565b9050611c27565b9291505056fe45524332303a207472616e7366657220746f20746865207a65726f206164647265737345524332303a206275726e20616d6f756e7420657863656564732062616c616e63654f776e61626c653a206e6577206f776e657220697320746865207a65726f206164647265737345524332303a20617070726f766520746f20746865207a65726f206164647265737345524332303a207472616e7366657220616d6f756e7420657863656564732062616c616e636545524332303a207472616e7366657220616d6f756e74206578636565647320616c6c6f77616e636545524332303a206275726e2066726f6d20746865207a65726f206164647265737345524332303a207472616e736665722066726f6d20746865207a65726f206164647265737345524332303a20617070726f76652066726f6d20746865207a65726f206164647265737345524332303a2064656372656173656420616c6c6f77616e63652062656c6f77207a65726fa2646970667358221220ec4b96b7041c102e12fd54f86dbf1f7e3ce3788f6f260b5fb795471348cff39e64736f6c634300060c0033")]
    contract DetailedTestToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function owner() external view returns (address);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);
        function mint(address _to, uint256 _amount) external;
        function burn(address _from, uint256 _amount) external;
        function renounceOwnership() external;
        function transferOwnership(address newOwner) external;
    }

    /// constructor()
    #[sol(rpc, bytecode = "6080604052348015620000125760006000fd5b505b5b6040518060400160405280600d81526020017f4661737454657374546f6b656e000000000000000000000000000000000000008152602001506040518060400160405280600381526020017f46545400000000000000000000000000000000000000000000000000000000008152602001505b5b5b8160036000509080519060200190620000a59291906200045c565b508060046000509080519060200190620000c19291906200045c565b506012600560006101000a81548160ff021916908360ff1602179055505b50506000620000f3620001b660201b60201c565b905080600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055508073ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a3505b620001af3369d3c21bcecceda1000000620001c460201b60201c565b5b6200050e565b6000339050620001c1565b90565b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff16141515156200026d576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601f8152602001807f45524332303a206d696e7420746f20746865207a65726f20616464726573730081526020015060200191505060405180910390fd5b6200028160008383620003c060201b60201c565b620002a081600260005054620003c660201b62000f181790919060201c565b60026000508190909055506200030a81600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005054620003c660201b62000f181790919060201c565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b5050565b5b505050565b6000600082840190508381101515156200044b576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601b8152602001807f536166654d6174683a206164646974696f6e206f766572666c6f77000000000081526020015060200191505060405180910390fd5b809150506200045656505b92915050565b828054600181600116156101000203166002900490600052602060002090601f016020900481019282601f106200049f57805160ff1916838001178555620004d5565b82800160010185558215620004d5579182015b82811115620004d45782518260005090905591602001919060010190620004b2565b5b509050620004e49190620004e8565b5090565b620004ee565b808211156200050a5760008181506000905550600101620004ee565b5090565b6116d8806200051e6000396000f3fe60806040523480156100115760006000fd5b50600436106100ef5760003560e01c8063715018a61161008d578063a457c2d711610067578063a457c2d714610422578063a9059cbb14610487578063dd62ed3e146104ec578063f2fde38b14610565576100ef565b8063715018a6146103605780638da5cb5b1461036a57806395d89b411461039e576100ef565b806323b872dd116100c957806323b872dd146101fc578063313ce5671461028157806339509351146102a257806370a0823114610307576100ef565b806306fdde03146100f5578063095ea7b31461017957806318160ddd146101de576100ef565b60006000fd5b6100fd6105aa565b6040518080602001828103825283818151815260200191508051906020019080838360005b8381101561013e5780820151818401525b602081019050610122565b50505050905090810190601f16801561016b5780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6101c6600480360360408110156101905760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610654565b60405180821515815260200191505060405180910390f35b6101e6610683565b6040518082815260200191505060405180910390f35b610269600480360360608110156102135760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610695565b60405180821515815260200191505060405180910390f35b610289610794565b604051808260ff16815260200191505060405180910390f35b6102ef600480360360408110156102b95760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190803590602001909291905050506107b0565b60405180821515815260200191505060405180910390f35b61034a6004803603602081101561031e5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610883565b6040518082815260200191505060405180910390f35b6103686108d7565b005b610372610a6f565b604051808273ffffffffffffffffffffffffffffffffffffffff16815260200191505060405180910390f35b6103a6610a9e565b6040518080602001828103825283818151815260200191508051906020019080838360005b838110156103e75780820151818401525b6020810190506103cb565b50505050905090810190601f1680156104145780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b61046f600480360360408110156104395760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610b48565b60405180821515815260200191505060405180910390f35b6104d46004803603604081101561049e5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919080359060200190929190505050610c35565b60405180821515815260200191505060405180910390f35b61054f600480360360408110156105035760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610c64565b6040518082815260200191505060405180910390f35b6105a86004803603602081101561057c5760006000fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610cf9565b005b606060036000508054600181600116156101000203166002900480601f0160208091040260200160405190810160405280929190818152602001828054600181600116156101000203166002900480156106455780601f1061061a57610100808354040283529160200191610645565b820191906000526020600020905b81548152906001019060200180831161062857829003601f168201915b50505050509050610651565b90565b6000610674610667610fac63ffffffff16565b8484610fb963ffffffff16565b6001905061067d565b92915050565b60006002600050549050610692565b90565b60006106a88484846111c063ffffffff16565b610784846106ba610fac63ffffffff16565b6107798560405180606001604052806028815260200161160d60289139600160005060008b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050600061072c610fac63ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546114ac9092919063ffffffff16565b610fb963ffffffff16565b6001905061078d565b9392505050565b6000600560009054906101000a900460ff1690506107ad565b90565b60006108746107c3610fac63ffffffff16565b8461086985600160005060006107dd610fac63ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008973ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005054610f1890919063ffffffff16565b610fb963ffffffff16565b6001905061087d565b92915050565b6000600060005060008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000505490506108d2565b919050565b6108e5610fac63ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff161415156109ac576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a36000600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505b5b565b6000600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff169050610a9b565b90565b606060046000508054600181600116156101000203166002900480601f016020809104026020016040519081016040528092919081815260200182805460018160011615610100020316600290048015610b395780601f10610b0e57610100808354040283529160200191610b39565b820191906000526020600020905b815481529060010190602001808311610b1c57829003601f168201915b50505050509050610b45565b90565b6000610c26610b5b610fac63ffffffff16565b84610c1b8560405180606001604052806025815260200161167e6025913960016000506000610b8e610fac63ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008a73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546114ac9092919063ffffffff16565b610fb963ffffffff16565b60019050610c2f565b92915050565b6000610c55610c48610fac63ffffffff16565b84846111c063ffffffff16565b60019050610c5e565b92915050565b6000600160005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050549050610cf3565b92915050565b610d07610fac63ffffffff16565b73ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16141515610dce576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657281526020015060200191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff1614151515610e56576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602681526020018061159f6026913960400191505060405180910390fd5b8073ffffffffffffffffffffffffffffffffffffffff16600560019054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a380600560016101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505b5b50565b600060008284019050838110151515610f9c576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601b8152602001807f536166654d6174683a206164646974696f6e206f766572666c6f77000000000081526020015060200191505060405180910390fd5b80915050610fa656505b92915050565b6000339050610fb6565b90565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff1614151515611041576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602481526020018061165a6024913960400191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff16141515156110c9576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260228152602001806115c56022913960400191505060405180910390fd5b80600160005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff167f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925836040518082815260200191505060405180910390a35b505050565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff1614151515611248576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260258152602001806116356025913960400191505060405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff16141515156112d0576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602381526020018061157c6023913960400191505060405180910390fd5b6112e183838361157563ffffffff16565b611353816040518060600160405280602681526020016115e760269139600060005060008773ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600050546114ac9092919063ffffffff16565b600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055506113f681600060005060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060005054610f1890919063ffffffff16565b600060005060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000508190909055508173ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef836040518082815260200191505060405180910390a35b505050565b6000838311158290151561155c576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825283818151815260200191508051906020019080838360005b838110156115215780820151818401525b602081019050611505565b50505050905090810190601f16801561154e5780820380516001836020036101000a031916815260200191505b509250505060405180910390fd5b50600083850390508091505061156e56505b9392505050565b5b50505056fe45524332303a207472616e7366657220746f20746865207a65726f20616464726573734f776e61626c653a206e6577206f776e657220697320746865207a65726f206164647265737345524332303a20617070726f766520746f20746865207a65726f206164647265737345524332303a207472616e7366657220616d6f756e7420657863656564732062616c616e636545524332303a207472616e7366657220616d6f756e74206578636565647320616c6c6f77616e636545524332303a207472616e736665722066726f6d20746865207a65726f206164647265737345524332303a20617070726f76652066726f6d20746865207a65726f206164647265737345524332303a2064656372656173656420616c6c6f77616e63652062656c6f77207a65726fa2646970667358221220a82de2d5bf995c6c4ba22eb62735372496e684cb6d54bf350be0202317d8c49364736f6c634300060c0033")]
    contract FastTestToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function owner() external view returns (address);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);
        function renounceOwnership() external;
        function transferOwnership(address newOwner) external;
    }
}
